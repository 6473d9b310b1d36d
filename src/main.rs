mod app;
mod tile;

use app::App;

pub(crate) const BOARD_WIDTH: u32 = 1200;
pub(crate) const BOARD_HEIGHT: u32 = 800;
pub(crate) const GRID: u32 = 3;
pub(crate) const TILE_WIDTH: u32 = BOARD_WIDTH / GRID;
pub(crate) const TILE_HEIGHT: u32 = BOARD_HEIGHT / GRID;
pub(crate) const IMAGE_SRC: &str = "puzzles/harbor.jpg";
pub(crate) const SOLVED_NOTICE_DELAY_MS: u32 = 100;
pub(crate) const SOLVED_NOTICE_TEXT: &str = "Puzzle complete!";

fn main() {
    yew::Renderer::<App>::new().render();
}
