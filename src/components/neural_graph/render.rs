use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::NeuralGraphState;

/// Draws one frame from current state. Read-only: all phase/counter
/// mutation happens in [`NeuralGraphState::tick`].
pub fn render(state: &NeuralGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_connections(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_connections(state: &NeuralGraphState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(1.0);
	for connection in state.graph.connections() {
		let from = &state.graph.nodes()[connection.from];
		let to = &state.graph.nodes()[connection.to];
		// The canvas clamps out-of-range alpha for us.
		let opacity = connection.opacity + 0.1 * connection.pulse.sin();

		ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", opacity));
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.stroke();
	}
}

fn draw_nodes(state: &NeuralGraphState, ctx: &CanvasRenderingContext2d) {
	for node in state.graph.nodes() {
		let scale = 1.0 + 0.3 * node.pulse.sin();
		let radius = node.radius * scale;
		let color = node.category.color();
		let glow_radius = node.category.glow_radius();

		let gradient = ctx
			.create_radial_gradient(node.x, node.y, 0.0, node.x, node.y, glow_radius)
			.unwrap();
		gradient.add_color_stop(0.0, &format!("{}80", color)).unwrap();
		gradient.add_color_stop(1.0, "transparent").unwrap();
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, glow_radius, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();

		ctx.set_fill_style_str(color);
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI);
		ctx.fill();
	}
}
