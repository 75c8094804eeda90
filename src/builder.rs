use std::num::NonZero;

use ndarray::Array2;

use crate::board::Board;
use crate::cell::Cell;
use crate::config::GameConfig;
use crate::error::InvalidInput;
use crate::location::{Dimension, Location};
use crate::matcher::MatchPolicy;

/// A builder for [`Board`]s, mostly useful for setting up positions by hand.
///
/// Tokens are given by display character; each new character becomes the next color of the palette.
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a call has made the builder invalid, further calls that place tokens do nothing.
#[derive(Clone)]
pub struct BoardBuilder {
    config: GameConfig,
    cells: Array2<Cell>,
    color_displays: Vec<char>,
    invalid_reasons: Vec<InvalidInput>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

impl BoardBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(x, y)` order, and otherwise default settings.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self::with_config(GameConfig { dims, ..Default::default() })
    }

    /// Construct a new [`Self`] from a full configuration.
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            cells: Array2::from_shape_simple_fn((config.dims.1.get(), config.dims.0.get()), Cell::default),

            color_displays: Default::default(),
            invalid_reasons: Default::default(),
        }
    }

    /// Shorthand for [`Self::with_dims`] taking plain numbers; zero extents become 1.
    pub fn square(side: usize) -> Self {
        let side = NonZero::new(side).unwrap_or(NonZero::<usize>::MIN);
        Self::with_dims((side, side))
    }

    /// Register `display` as a palette color without placing any token of it.
    pub fn add_color(&mut self, display: char) -> &mut Self {
        self.color_of(display);
        self
    }

    fn color_of(&mut self, display: char) -> usize {
        match self.color_displays.iter().position(|known| *known == display) {
            Some(color) => color,
            None => {
                self.color_displays.push(display);
                self.color_displays.len() - 1
            }
        }
    }

    /// Place a token displayed as `display` at `location`.
    ///
    /// May cause the builder to enter an invalid state if `location` is out of bounds or already holds a token.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_token(&mut self, display: char, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let Some(cell) = self.cells.get(location.as_index()) else {
            self.invalid_reasons.push(InvalidInput::OutOfBounds {
                location,
                width: self.cells.ncols(),
                height: self.cells.nrows(),
            });
            return self;
        };
        if !cell.is_empty() {
            self.invalid_reasons.push(InvalidInput::Occupied { location });
            return self;
        }

        let color = self.color_of(display);
        self.cells[location.as_index()] = Cell::Token { color };
        self
    }

    /// Shorthand for multiple calls to [`Self::add_token`] with the same `display`, with the same conditions.
    pub fn add_tokens(&mut self, display: char, locations: impl IntoIterator<Item = Location>) -> &mut Self {
        for location in locations {
            self.add_token(display, location);
        }

        self
    }

    /// Remove whatever token sits at `location`. Its color stays in the palette.
    ///
    /// May cause the builder to enter an invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn remove_token(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        match self.cells.get_mut(location.as_index()) {
            Some(cell) => *cell = Cell::Empty,
            None => self.invalid_reasons.push(InvalidInput::OutOfBounds {
                location,
                width: self.cells.ncols(),
                height: self.cells.nrows(),
            }),
        }

        self
    }

    /// Set the shortest run that is removed. Checked at [`Self::build`].
    pub fn min_run_length(&mut self, min_run_length: usize) -> &mut Self {
        self.config.min_run_length = min_run_length;
        self
    }

    /// Set how runs are looked for.
    pub fn policy(&mut self, policy: MatchPolicy) -> &mut Self {
        self.config.policy = policy;
        self
    }

    /// Set the points awarded per clearing move.
    pub fn revenue(&mut self, revenue: u32) -> &mut Self {
        self.config.revenue = revenue;
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if no token placement has failed so far, `Some(&Vec<InvalidInput>)` otherwise.
    /// The configuration itself is only checked by [`Self::build`].
    pub fn is_valid(&self) -> Option<&Vec<InvalidInput>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`] with a score of 0.
    /// If the builder or its configuration is invalid for any reason, a [`Vec`] of [`InvalidInput`] will indicate why.
    pub fn build(&self) -> Result<Board, Vec<InvalidInput>> {
        let mut reasons = self.invalid_reasons.clone();
        if let Err(reason) = self.config.validate() {
            reasons.push(reason);
        }
        if !reasons.is_empty() {
            return Err(reasons);
        }

        Ok(Board {
            cells: self.cells.clone(),
            color_displays: self.color_displays.clone(),
            config: self.config,
            score: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::BoardBuilder;
    use crate::error::InvalidInput;
    use crate::location::Location;

    #[test]
    fn palette_follows_first_appearance() {
        let board = BoardBuilder::square(5)
            .add_token('R', Location(0, 0))
            .add_token('G', Location(1, 0))
            .add_token('R', Location(2, 0))
            .build()
            .unwrap();

        assert_eq!(board.palette(), &['R', 'G']);
        assert_eq!(board.token_at(Location(2, 0)), Ok(Some(0)));
        assert_eq!(board.token_at(Location(1, 0)), Ok(Some(1)));
    }

    #[test]
    fn out_of_bounds_token_invalidates() {
        let mut builder = BoardBuilder::square(5);
        builder.add_token('R', Location(5, 0)).add_token('R', Location(0, 0));

        assert_eq!(builder.is_valid().map(Vec::len), Some(1));
        assert!(matches!(builder.build(), Err(reasons) if reasons == vec![InvalidInput::OutOfBounds { location: Location(5, 0), width: 5, height: 5 }]));
    }

    #[test]
    fn stacking_tokens_invalidates() {
        let mut builder = BoardBuilder::square(5);
        builder.add_tokens('R', [Location(1, 1), Location(1, 1)]);

        assert_eq!(builder.is_valid(), Some(&vec![InvalidInput::Occupied { location: Location(1, 1) }]));
    }

    #[test]
    fn removed_tokens_leave_their_color() {
        let board = BoardBuilder::square(5)
            .add_token('R', Location(3, 3))
            .remove_token(Location(3, 3))
            .build()
            .unwrap();

        assert_eq!(format!("{}", board), ".....
.....
.....
.....
.....
");
        assert_eq!(board.palette(), &['R']);
    }

    #[test]
    fn config_is_checked_on_build() {
        assert!(BoardBuilder::square(3).build().is_err());
        assert!(BoardBuilder::square(3).min_run_length(3).build().is_ok());
    }
}
