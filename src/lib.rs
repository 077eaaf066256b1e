pub mod auto_move;
pub mod bitmask;
pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod game;
pub mod game_type;
pub mod outcome;
pub mod player;
pub mod position;
pub mod rules;
pub mod session;
pub mod store;
pub mod territory;

#[cfg(feature = "serde")]
pub mod serde_support;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn enclosure(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use player::Player;
    use python_bindings::*;
    m.add_class::<PyGame>()?;
    m.add("PLAYER_ONE", Player::One as i8)?;
    m.add("PLAYER_TWO", Player::Two as i8)?;
    m.add("MAX_DIMENSION", board::MAX_DIMENSION)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::direction::Direction;
    use crate::error::GameError;
    use crate::game::Game;
    use crate::game_type::GameType;
    use crate::player::{encode_active, Player};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn to_py_err(err: GameError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }

    fn parse_player(player: i8) -> PyResult<Player> {
        Player::from_int(player).ok_or_else(|| to_py_err(GameError::InvalidPlayer(player)))
    }

    #[pyclass(name = "Game")]
    pub struct PyGame {
        game: Game,
        rng: StdRng,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        #[pyo3(signature = (dimension=5, game_type="HUMAN_VS_AI", seed=0))]
        pub fn new(dimension: usize, game_type: &str, seed: u64) -> PyResult<Self> {
            let game_type: GameType = game_type.parse().map_err(to_py_err)?;
            Ok(PyGame {
                game: Game::new(dimension, game_type).map_err(to_py_err)?,
                rng: StdRng::seed_from_u64(seed),
            })
        }

        pub fn size(&self) -> usize {
            self.game.board().size()
        }

        pub fn board(&self) -> Vec<Vec<i8>> {
            self.game.board().to_rows()
        }

        pub fn active_player(&self) -> i8 {
            encode_active(self.game.active())
        }

        pub fn game_type(&self) -> String {
            self.game.game_type().to_string()
        }

        pub fn is_over(&self) -> bool {
            self.game.is_over()
        }

        pub fn points(&self) -> (usize, usize) {
            let points = self.game.points();
            (points.player_one, points.player_two)
        }

        pub fn winner(&self) -> Option<i8> {
            self.game
                .outcome()
                .and_then(|o| o.winner())
                .map(|p| p as i8)
        }

        pub fn possible_directions(&self, player: i8) -> PyResult<Vec<String>> {
            let player = parse_player(player)?;
            Ok(self
                .game
                .possible_directions(player)
                .into_iter()
                .map(|d| d.to_string())
                .collect())
        }

        /// Returns the next active player, `0` once the game is over.
        pub fn make_move(&mut self, direction: &str, player: i8) -> PyResult<i8> {
            let direction: Direction = direction.parse().map_err(to_py_err)?;
            let player = parse_player(player)?;
            self.game
                .make_move(direction, player)
                .map(encode_active)
                .map_err(to_py_err)
        }

        pub fn automatic_move(&mut self) -> PyResult<i8> {
            self.game
                .automatic_move(&mut self.rng)
                .map(encode_active)
                .map_err(to_py_err)
        }

        pub fn __str__(&self) -> String {
            self.game.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Game(size={}, game_type={}, active_player={}, over={})",
                self.game.board().size(),
                self.game.game_type(),
                encode_active(self.game.active()),
                self.game.is_over()
            )
        }
    }
}
