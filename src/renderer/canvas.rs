//! Canvas 2D renderer for the browser host

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{BULLET_HEIGHT, BULLET_WIDTH, ENEMY_SIZE};
use crate::game::FrameView;
use crate::sim::GamePhase;
use crate::ui::Button;

const HUD_FONT: &str = "24px Arial";
const TITLE_FONT: &str = "48px Arial";
const BUTTON_FONT: &str = "20px Arial";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Render one frame
    pub fn draw(&self, view: &FrameView, fps: Option<u32>) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

        match view.phase {
            GamePhase::Playing => {
                self.draw_player(view);
                self.draw_enemies(view);
                self.draw_projectiles(view);
                self.draw_hud(view)?;
            }
            GamePhase::Menu | GamePhase::GameOver => self.draw_title(view)?,
        }

        for button in view.buttons {
            self.draw_button(button)?;
        }

        if let Some(fps) = fps {
            self.ctx.set_fill_style_str("gray");
            self.ctx.set_font("14px Arial");
            self.ctx.set_text_align("right");
            self.ctx
                .fill_text(&format!("{} fps", fps), self.width - 10.0, 20.0)?;
        }
        Ok(())
    }

    fn draw_player(&self, view: &FrameView) {
        let p = view.player;
        self.ctx.set_fill_style_str("blue");
        self.ctx.begin_path();
        // Arc only fails on a negative radius
        let _ = self.ctx.arc(
            p.pos.x as f64,
            p.pos.y as f64,
            p.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn draw_enemies(&self, view: &FrameView) {
        let size = ENEMY_SIZE as f64;
        for enemy in view.enemies {
            self.ctx.set_fill_style_str(enemy.level.color());
            self.ctx
                .fill_rect(enemy.pos.x as f64, enemy.pos.y as f64, size, size);
        }
    }

    fn draw_projectiles(&self, view: &FrameView) {
        self.ctx.set_fill_style_str("black");
        for projectile in view.projectiles {
            self.ctx.fill_rect(
                (projectile.pos.x - BULLET_WIDTH / 2.0) as f64,
                projectile.pos.y as f64,
                BULLET_WIDTH as f64,
                BULLET_HEIGHT as f64,
            );
        }
    }

    fn draw_hud(&self, view: &FrameView) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str("black");
        self.ctx.set_font(HUD_FONT);
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("alphabetic");
        for (i, line) in view.hud.iter().enumerate() {
            self.ctx.fill_text(line, 20.0, 30.0 + 30.0 * i as f64)?;
        }
        Ok(())
    }

    fn draw_title(&self, view: &FrameView) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str("black");
        self.ctx.set_font(TITLE_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("alphabetic");
        let cx = view.viewport.x as f64 / 2.0;
        let top = view.viewport.y as f64 / 2.0 - 100.0;
        for (i, line) in view.title.iter().enumerate() {
            self.ctx.fill_text(line, cx, top + 50.0 * i as f64)?;
        }
        Ok(())
    }

    fn draw_button(&self, button: &Button) -> Result<(), JsValue> {
        let (x, y) = (button.x as f64, button.y as f64);
        let (w, h) = (button.width as f64, button.height as f64);
        self.ctx.set_fill_style_str("#000");
        self.ctx.fill_rect(x, y, w, h);
        self.ctx.set_fill_style_str("#fff");
        self.ctx.set_font(BUTTON_FONT);
        self.ctx.set_text_baseline("middle");
        self.ctx.set_text_align("center");
        self.ctx.fill_text(button.label, x + w / 2.0, y + h / 2.0)
    }
}
