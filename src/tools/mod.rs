//! Miscellaneous tools for debugging and generating [`Position`]s.
//!
//! [`Position`]: ../position/struct.Position.html

pub mod prng;

use self::prng::PRNG;
use core::bitboard::BitBoard;
use core::masks::*;
use core::sq::SQ;
use core::{PieceType, Player, Rank, ALL_FILES};
use position::Position;

use rand;

/// Random [`Position`] generator. Creates either one or many random positions
/// with optional parameters.
///
/// The generated positions are structurally sound rather than reachable games:
/// both kings are always present, pawns never stand on the back ranks, and the
/// piece count respects the 32-piece cap. Castling eligibility and an
/// en-passant pair are only added when asked for.
///
/// # Examples
///
/// Create one `Position` in a pseudo-random fashion:
///
/// ```
/// use fenpack::tools::RandPosition;
///
/// let pos = RandPosition::new()
///     .pseudo_random(12455)
///     .one();
/// ```
///
/// Create a `Vec` of 10 random `Position`s, each carrying castling eligibility
/// and an en-passant target:
///
/// ```
/// use fenpack::{Position, tools::RandPosition};
///
/// let positions: Vec<Position> = RandPosition::new()
///     .pseudo_random(12455)
///     .with_castling()
///     .with_en_passant()
///     .many(10);
/// ```
///
/// [`Position`]: ../position/struct.Position.html
pub struct RandPosition {
    piece_cap: u8,
    castling: bool,
    en_passant: bool,
    prng: PRNG,
    seed: u64,
}

impl Default for RandPosition {
    fn default() -> Self {
        RandPosition::new()
    }
}

impl RandPosition {
    /// Create a new `RandPosition` object.
    pub fn new() -> Self {
        RandPosition {
            piece_cap: 32,
            castling: false,
            en_passant: false,
            prng: PRNG::init(1),
            seed: 0,
        }
    }

    /// Turns PseudoRandom generation on. This allows for the same random
    /// `Position`s to be created from the same seed.
    pub fn pseudo_random(mut self, seed: u64) -> Self {
        self.seed = if seed == 0 { 1 } else { seed };
        self.prng = PRNG::init(self.seed);
        self
    }

    /// Caps the total number of pieces a generated `Position` may hold.
    /// Values are clamped to the `2..=32` range, as both kings are always
    /// placed.
    pub fn max_pieces(mut self, cap: u8) -> Self {
        self.piece_cap = cap.max(2).min(32);
        self
    }

    /// Generated positions gain a random subset of castling-eligible rooks on
    /// the four standard rook starting squares.
    pub fn with_castling(mut self) -> Self {
        self.castling = true;
        self
    }

    /// Generated positions gain a just-double-pushed pawn and its matching
    /// en-passant target square.
    pub fn with_en_passant(mut self) -> Self {
        self.en_passant = true;
        self
    }

    /// Creates a `Vec<Position>` full of `Position`s containing random
    /// placements. The `Vec` will be of size `size`.
    pub fn many(mut self, size: usize) -> Vec<Position> {
        let mut positions: Vec<Position> = Vec::with_capacity(size);
        for _x in 0..size {
            positions.push(self.go());
        }
        positions
    }

    /// Creates a singular `Position` with a random placement.
    pub fn one(mut self) -> Position {
        self.go()
    }

    /// This makes a position.
    fn go(&mut self) -> Position {
        let mut pos = Position::empty();
        if self.random() % 2 == 0 {
            pos.set_turn(Player::Black);
        }

        let wk = self.empty_sq(&pos);
        pos.place(wk, Player::White, PieceType::K);
        let bk = self.empty_sq(&pos);
        pos.place(bk, Player::Black, PieceType::K);

        if self.castling {
            self.sprinkle_castle_rooks(&mut pos);
        }
        if self.en_passant {
            self.push_ep_pawn(&mut pos);
        }

        // scatter the remaining budget across a random bitboard
        let scatter = BitBoard(self.prng_or_rand()) & !pos.occupied();
        for sq in scatter {
            if pos.count_all_pieces() >= self.piece_cap {
                break;
            }
            let player = if self.random() % 2 == 0 {
                Player::White
            } else {
                Player::Black
            };
            let mut piece = match self.random() % 5 {
                0 => PieceType::P,
                1 => PieceType::N,
                2 => PieceType::B,
                3 => PieceType::R,
                _ => PieceType::Q,
            };
            // pawns never stand on the back ranks
            if piece == PieceType::P && (sq.rank() == Rank::R1 || sq.rank() == Rank::R8) {
                piece = PieceType::N;
            }
            pos.place(sq, player, piece);
        }
        pos
    }

    fn sprinkle_castle_rooks(&mut self, pos: &mut Position) {
        let corners = [
            (SQ(ROOK_WHITE_QSIDE_START), Player::White),
            (SQ(ROOK_WHITE_KSIDE_START), Player::White),
            (SQ(ROOK_BLACK_QSIDE_START), Player::Black),
            (SQ(ROOK_BLACK_KSIDE_START), Player::Black),
        ];
        for &(sq, player) in corners.iter() {
            if pos.count_all_pieces() >= self.piece_cap {
                return;
            }
            if self.random() % 2 == 0 && (pos.occupied() & sq.to_bb()).is_empty() {
                pos.place(sq, player, PieceType::R);
                pos.set_castle_rook(sq);
            }
        }
    }

    fn push_ep_pawn(&mut self, pos: &mut Position) {
        if pos.count_all_pieces() >= self.piece_cap {
            return;
        }
        // the double-pushed pawn belongs to the player who just moved
        let mover = pos.turn().other_player();
        let rank = if mover == Player::White {
            Rank::R4
        } else {
            Rank::R5
        };
        let sq = SQ::make(ALL_FILES[self.random() % 8], rank);
        if (pos.occupied() & sq.to_bb()).is_empty() {
            pos.place(sq, mover, PieceType::P);
            pos.set_ep_square(sq.behind());
        }
    }

    /// Picks a uniformly random unoccupied square.
    fn empty_sq(&mut self, pos: &Position) -> SQ {
        loop {
            let sq = SQ(self.random() as u8 & 0b11_1111);
            if (pos.occupied() & sq.to_bb()).is_empty() {
                return sq;
            }
        }
    }

    /// Creates a random number.
    fn random(&mut self) -> usize {
        self.prng_or_rand() as usize
    }

    fn prng_or_rand(&mut self) -> u64 {
        if self.seed == 0 {
            return rand::random::<u64>();
        }
        self.prng.rand()
    }
}
