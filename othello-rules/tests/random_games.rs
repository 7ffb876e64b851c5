//! Full games driven by a display that picks squares at random.

use othello_rules::{
    Board, BoardDisplay, Cell, Color, Engine, Legality, Location, Outcome, Rules, NUM_SPACES,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct RandomDisplay {
    rng: StdRng,
    markers: Board,
    messages: Vec<String>,
}

impl RandomDisplay {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            markers: Board::empty(),
            messages: Vec::new(),
        }
    }
}

impl BoardDisplay for RandomDisplay {
    fn select_cell(&mut self) -> Option<Location> {
        Some(Location::from_index(self.rng.gen_range(0..NUM_SPACES as u8)))
    }

    fn place_marker(&mut self, color: Color, loc: Location) {
        self.markers.set(loc, color.into());
    }

    fn clear_marker(&mut self, loc: Location) {
        self.markers.set(loc, Cell::Empty);
    }

    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

/// The two piece counts in a status line.
fn status_counts(status: &str) -> (usize, usize) {
    let counts: Vec<usize> = status
        .split_whitespace()
        .filter_map(|word| word.parse().ok())
        .collect();
    assert_eq!(counts.len(), 2, "malformed status line {:?}", status);
    (counts[0], counts[1])
}

fn play(seed: u64, legality: Legality) -> (Outcome, Engine<RandomDisplay>) {
    let mut engine = Engine::with_rules(RandomDisplay::new(seed), Rules::new(legality));
    let outcome = engine.run().expect("random input never closes");
    (outcome, engine)
}

#[test]
fn adjacency_games_fill_the_board() {
    for seed in 0..20 {
        let (outcome, engine) = play(seed, Legality::Adjacent);
        let state = engine.state();
        let display = engine.display();

        assert!(state.is_game_over());
        assert_eq!(display.markers, state.board);
        assert_eq!(outcome, state.outcome());

        let score = state.score();
        assert_eq!(score.black + score.white, NUM_SPACES);

        // One status line per placement, then the result.
        let (statuses, result) = display.messages.split_at(display.messages.len() - 1);
        assert_eq!(statuses.len(), NUM_SPACES - 4);
        assert_eq!(result[0], outcome.to_string());

        for (placed, status) in statuses.iter().enumerate() {
            let (black, white) = status_counts(status);
            assert_eq!(black + white, 4 + placed);
        }
    }
}

#[test]
fn bracket_games_end_when_nobody_can_move() {
    for seed in 0..20 {
        let (outcome, engine) = play(seed, Legality::Bracket);
        let state = engine.state();
        let display = engine.display();

        assert!(state.is_stalled(Legality::Bracket));
        assert_eq!(display.markers, state.board);
        assert_eq!(outcome, state.outcome());

        // Each status line precedes exactly one placement.
        let placements = NUM_SPACES - 4 - state.board.count_empty();
        assert_eq!(display.messages.len(), placements + 1);
        assert_eq!(display.messages.last(), Some(&outcome.to_string()));
    }
}

#[test]
fn first_status_marks_black() {
    let (_, engine) = play(7, Legality::Adjacent);
    assert_eq!(
        engine.display().messages[0],
        "**black** has 2 pieces up --- white has 2 pieces up"
    );
}
