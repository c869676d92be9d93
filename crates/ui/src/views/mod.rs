mod game;
mod menu;
mod quiz;
mod result;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use game::GameView;
pub use menu::MenuView;
pub use quiz::{PhaseSwitch, QuizRoot};
pub use result::ResultView;
pub use state::ViewError;
