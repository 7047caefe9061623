use floorplan_layout::{ArrangeStrategy, PixelCoordinate};
use macroquad::prelude::*;
use tracing::{info, warn};

use crate::session::FloorplanSession;

// Function to configure the macroquad window
pub fn window_conf() -> Conf {
    Conf {
        window_title: "Expo Floor Plan".to_string(),
        window_width: 1280,
        window_height: 900,
        high_dpi: true,
        ..
        Default::default()
    }
}

const MARGIN: f32 = 20.0;
const HEADER_HEIGHT: f32 = 60.0;
const FOOTER_HEIGHT: f32 = 30.0;

/// Maps canvas units onto the window, keeping the aspect ratio.
struct Viewport {
    left: f32,
    top: f32,
    scale: f32,
}

impl Viewport {
    fn fit(session: &FloorplanSession) -> Self {
        let avail_w = (screen_width() - 2.0 * MARGIN).max(1.0);
        let avail_h = (screen_height() - HEADER_HEIGHT - FOOTER_HEIGHT - MARGIN).max(1.0);
        let scale = (avail_w / session.canvas.width).min(avail_h / session.canvas.height);
        Viewport { left: MARGIN, top: HEADER_HEIGHT, scale }
    }

    fn to_screen(&self, p: PixelCoordinate) -> Vec2 {
        vec2(self.left + p.x * self.scale, self.top + p.y * self.scale)
    }
}

pub async fn run_floorplan_loop(mut session: FloorplanSession) {
    info!("Floor plan loop starting inside graphics module...");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::N) {
            // Failures are already shown in the status line
            let _ = session.add_booth();
        }
        let chosen = if is_key_pressed(KeyCode::G) {
            Some(ArrangeStrategy::Grid)
        } else if is_key_pressed(KeyCode::R) {
            Some(ArrangeStrategy::SingleRow)
        } else if is_key_pressed(KeyCode::C) {
            Some(ArrangeStrategy::SingleColumn)
        } else {
            None
        };
        if let Some(strategy) = chosen {
            if let Err(e) = session.rearrange(strategy) {
                warn!("Rearrange failed: {}", e);
                session.status = format!("Rearrange failed: {}", e);
            }
        }

        clear_background(LIGHTGRAY);
        let view = Viewport::fit(&session);

        let corner = view.to_screen(PixelCoordinate::new(0.0, 0.0));
        draw_rectangle(
            corner.x,
            corner.y,
            session.canvas.width * view.scale,
            session.canvas.height * view.scale,
            WHITE,
        );
        draw_rectangle_lines(
            corner.x,
            corner.y,
            session.canvas.width * view.scale,
            session.canvas.height * view.scale,
            2.0,
            DARKGRAY,
        );

        let booth_w = session.booth_size.width * view.scale;
        let booth_h = session.booth_size.height * view.scale;
        for booth in &session.booths {
            let Some(position) = booth.position else {
                continue;
            };
            let p = view.to_screen(position);
            draw_rectangle(p.x, p.y, booth_w, booth_h, SKYBLUE);
            draw_rectangle_lines(p.x, p.y, booth_w, booth_h, 1.0, DARKBLUE);
            if let Some(label) = booth.grid_label(&session.grid) {
                draw_text(&label, p.x + 3.0, p.y + 14.0, 16.0, BLACK);
            }
        }

        draw_text(
            &format!("{} - {} booths", session.event_name, session.booths.len()),
            MARGIN,
            24.0,
            24.0,
            BLACK,
        );
        draw_text(&session.status, MARGIN, 46.0, 20.0, DARKGRAY);
        draw_text(
            "[N] add booth  [G] grid  [R] row  [C] column  [Esc] quit",
            MARGIN,
            screen_height() - 10.0,
            18.0,
            DARKGRAY,
        );

        next_frame().await
    }

    info!("Floor plan loop finished.");
}
