use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::NetworkState;
use super::types::{Node, Vec2};
use crate::data::{Status, Tier};

const BACKGROUND: &str = "#0a0a0f";
const EDGE_RGB: (u8, u8, u8) = (34, 211, 238);
const STATUS_DOT_RADIUS: f64 = 6.0;

/// Drawing primitives the graph needs, in logical (CSS pixel) coordinates.
pub trait Surface {
	fn fill_rect(&self, width: f64, height: f64, color: &str);
	fn line(&self, from: Vec2, to: Vec2, color: &str, width: f64);
	fn fill_circle(&self, center: Vec2, radius: f64, color: &str);
	fn stroke_circle(&self, center: Vec2, radius: f64, color: &str, width: f64);
	/// Radial gradient from `inner` at the center to `outer` at `radius`.
	fn glow(&self, center: Vec2, radius: f64, inner: &str, outer: &str);
	fn text(&self, text: &str, center: Vec2, font: &str, color: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn fill_rect(&self, width: f64, height: f64, color: &str) {
		self.set_fill_style_str(color);
		CanvasRenderingContext2d::fill_rect(self, 0.0, 0.0, width, height);
	}

	fn line(&self, from: Vec2, to: Vec2, color: &str, width: f64) {
		self.begin_path();
		self.move_to(from.x, from.y);
		self.line_to(to.x, to.y);
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.stroke();
	}

	fn fill_circle(&self, center: Vec2, radius: f64, color: &str) {
		self.begin_path();
		let _ = self.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(color);
		self.fill();
	}

	fn stroke_circle(&self, center: Vec2, radius: f64, color: &str, width: f64) {
		self.begin_path();
		let _ = self.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.stroke();
	}

	fn glow(&self, center: Vec2, radius: f64, inner: &str, outer: &str) {
		let Ok(gradient) =
			self.create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
		else {
			return;
		};
		if gradient.add_color_stop(0.0, inner).is_err()
			|| gradient.add_color_stop(1.0, outer).is_err()
		{
			return;
		}
		self.begin_path();
		let _ = self.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.fill();
	}

	fn text(&self, text: &str, center: Vec2, font: &str, color: &str) {
		self.set_fill_style_str(color);
		self.set_font(font);
		self.set_text_align("center");
		self.set_text_baseline("middle");
		let _ = self.fill_text(text, center.x, center.y);
	}
}

fn rgba((r, g, b): (u8, u8, u8), alpha: f64) -> String {
	format!("rgba({r}, {g}, {b}, {alpha})")
}

fn tier_rgb(tier: Tier) -> (u8, u8, u8) {
	match tier {
		Tier::Enterprise => (168, 85, 247),
		Tier::Professional => (34, 211, 238),
		Tier::Starter => (107, 114, 128),
	}
}

fn status_color(status: Status) -> &'static str {
	match status {
		Status::Online => "#22c55e",
		Status::Busy => "#eab308",
		Status::Offline => "#6b7280",
	}
}

/// Draws one frame. Does nothing until the surface has been measured.
pub fn render(state: &NetworkState, surface: &impl Surface) {
	if !state.has_area() {
		return;
	}
	surface.fill_rect(state.width, state.height, BACKGROUND);
	draw_connections(state, surface);
	for node in state.nodes() {
		draw_node(node, state.is_highlighted(&node.id), surface);
	}
}

fn draw_connections(state: &NetworkState, surface: &impl Surface) {
	for conn in state.connections() {
		let (Some(source), Some(target)) = (state.node(&conn.source), state.node(&conn.target))
		else {
			continue;
		};
		let highlighted = state.is_highlighted(&source.id) || state.is_highlighted(&target.id);
		let (alpha, width) = if highlighted { (0.6, 2.0) } else { (0.15, 1.0) };
		surface.line(source.position, target.position, &rgba(EDGE_RGB, alpha), width);
	}
}

fn draw_node(node: &Node, highlighted: bool, surface: &impl Surface) {
	let (center, r, hue) = (node.position, node.radius, tier_rgb(node.tier));

	if highlighted {
		surface.glow(center, r * 2.0, &rgba(EDGE_RGB, 0.3), &rgba(EDGE_RGB, 0.0));
	}

	let (fill_alpha, border_width) = if highlighted { (0.4, 3.0) } else { (0.2, 2.0) };
	surface.fill_circle(center, r, &rgba(hue, fill_alpha));
	surface.stroke_circle(center, r, &rgba(hue, 0.6), border_width);

	let dot = Vec2::new(center.x + r * 0.6, center.y - r * 0.6);
	surface.fill_circle(dot, STATUS_DOT_RADIUS, status_color(node.status));

	let font = format!("bold {}px \"IBM Plex Mono\", monospace", r * 0.6);
	surface.text(&node.avatar, center, &font, "#ffffff");
}
