use bevy_ecs::{
    query::With,
    system::{NonSend, NonSendMut, Query, Res},
};
use sdl2::pixels::Color;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;
use tracing::error;

use crate::constants::{animation, mechanics, ui, ARENA_SIZE};
use crate::geometry::Rect;
use crate::systems::components::{BallMotion, Countdown, DebugState, PlayerControlled, Position};
use crate::systems::state::{ButtonKind, ButtonRegions, GamePhase, PauseState};
use crate::texture::sprites::SpriteBank;

const BUTTON_FILL: Color = Color::RGB(20, 20, 24);
const BUTTON_BORDER: Color = Color::RGB(230, 230, 230);
const COUNTDOWN_FILL: Color = Color::RGB(240, 210, 80);
const WON_BANNER: Color = Color::RGB(70, 190, 120);
const LOST_BANNER: Color = Color::RGB(200, 60, 60);
const PAUSE_SHADE: Color = Color::RGBA(0, 0, 0, 140);
const HITBOX_OUTLINE: Color = Color::RGB(255, 0, 255);

fn to_sdl(rect: Rect) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(
        rect.min.x as i32,
        rect.min.y as i32,
        rect.size().x as u32,
        rect.size().y as u32,
    )
}

/// Advances every sprite stepper by one rendered frame's worth of time.
///
/// Runs unconditionally: sprites keep animating through menus and pauses,
/// only the simulation freezes.
pub fn animation_system(mut sprites: NonSendMut<SpriteBank>) {
    sprites.background.tick(animation::FRAME_STEP);
    sprites.player.tick(animation::FRAME_STEP);
    sprites.ball.tick(animation::FRAME_STEP);
}

/// Draws the whole frame: arena, entities, HUD, buttons, overlays.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    sprites: NonSend<SpriteBank>,
    phase: Res<GamePhase>,
    pause: Res<PauseState>,
    countdown: Res<Countdown>,
    regions: Res<ButtonRegions>,
    debug_state: Res<DebugState>,
    players: Query<&Position, With<PlayerControlled>>,
    balls: Query<&Position, With<BallMotion>>,
) {
    canvas.set_draw_color(Color::BLACK);
    canvas.clear();
    canvas.set_blend_mode(BlendMode::Blend);

    if let Err(e) = draw_frame(
        &mut canvas,
        &sprites,
        phase.effective(pause.active()),
        countdown.0,
        &regions,
        &debug_state,
        players.single().ok(),
        balls.single().ok(),
    ) {
        error!("Failed to draw frame: {e}");
    }

    canvas.present();
}

#[allow(clippy::too_many_arguments)]
fn draw_frame(
    canvas: &mut Canvas<Window>,
    sprites: &SpriteBank,
    phase: GamePhase,
    countdown: u32,
    regions: &ButtonRegions,
    debug_state: &DebugState,
    player: Option<&Position>,
    ball: Option<&Position>,
) -> Result<(), String> {
    canvas.copy(
        sprites.background.current(),
        None,
        to_sdl(Rect::new(glam::Vec2::ZERO, ARENA_SIZE)),
    )?;

    if let Some(player) = player {
        let dest = Rect::centered(player.0, mechanics::PLAYER_HALF_EXTENTS);
        canvas.copy(sprites.player.current(), None, to_sdl(dest))?;
    }

    if let Some(ball) = ball {
        let dest = Rect::centered(ball.0, glam::Vec2::splat(40.0));
        canvas.copy(sprites.ball.current(), None, to_sdl(dest))?;
    }

    match phase {
        GamePhase::Playing => draw_countdown_bar(canvas, countdown)?,
        GamePhase::Paused => {
            draw_countdown_bar(canvas, countdown)?;
            canvas.set_draw_color(PAUSE_SHADE);
            canvas.fill_rect(to_sdl(Rect::new(glam::Vec2::ZERO, ARENA_SIZE)))?;
        }
        GamePhase::Won => draw_banner(canvas, WON_BANNER)?,
        GamePhase::Lost => draw_banner(canvas, LOST_BANNER)?,
        GamePhase::Menu => {}
    }

    for kind in regions.visible(phase) {
        draw_button(canvas, regions.get(*kind), *kind)?;
    }

    if debug_state.hitboxes {
        draw_hitboxes(canvas, player, ball)?;
    }

    Ok(())
}

fn draw_countdown_bar(canvas: &mut Canvas<Window>, countdown: u32) -> Result<(), String> {
    let full = ui::COUNTDOWN_BAR;
    canvas.set_draw_color(BUTTON_FILL);
    canvas.fill_rect(to_sdl(full))?;

    let fraction = countdown as f32 / mechanics::COUNTDOWN_START as f32;
    let mut filled = full;
    filled.max.x = full.min.x + full.size().x * fraction.min(1.0);
    if filled.size().x >= 1.0 {
        canvas.set_draw_color(COUNTDOWN_FILL);
        canvas.fill_rect(to_sdl(filled))?;
    }

    canvas.set_draw_color(BUTTON_BORDER);
    canvas.draw_rect(to_sdl(full))
}

fn draw_banner(canvas: &mut Canvas<Window>, color: Color) -> Result<(), String> {
    canvas.set_draw_color(color);
    canvas.fill_rect(to_sdl(ui::COUNTDOWN_BAR))
}

fn draw_button(canvas: &mut Canvas<Window>, rect: Rect, kind: ButtonKind) -> Result<(), String> {
    canvas.set_draw_color(BUTTON_FILL);
    canvas.fill_rect(to_sdl(rect))?;

    // No text rendering; a small glyph-like mark distinguishes exit from
    // start/restart.
    canvas.set_draw_color(match kind {
        ButtonKind::Exit => LOST_BANNER,
        ButtonKind::Start | ButtonKind::Restart => WON_BANNER,
    });
    let marker = Rect::centered(rect.center(), rect.size() / glam::Vec2::new(8.0, 4.0));
    canvas.fill_rect(to_sdl(marker))?;

    canvas.set_draw_color(BUTTON_BORDER);
    canvas.draw_rect(to_sdl(rect))
}

fn draw_hitboxes(
    canvas: &mut Canvas<Window>,
    player: Option<&Position>,
    ball: Option<&Position>,
) -> Result<(), String> {
    canvas.set_draw_color(HITBOX_OUTLINE);
    if let Some(player) = player {
        canvas.draw_rect(to_sdl(Rect::centered(player.0, mechanics::PLAYER_HALF_EXTENTS)))?;
    }
    if let Some(ball) = ball {
        let center = sdl2::rect::Point::new(ball.0.x as i32, ball.0.y as i32);
        canvas.draw_line(center.offset(-6, 0), center.offset(6, 0))?;
        canvas.draw_line(center.offset(0, -6), center.offset(0, 6))?;
    }
    Ok(())
}
