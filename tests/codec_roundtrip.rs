extern crate fenpack;

use fenpack::tools::RandPosition;
use fenpack::{decode, encode, Position};

fn round_trip(pos: &Position) {
    let packed = encode(pos).unwrap();
    let back = decode(&packed).unwrap();
    assert_eq!(&back, pos, "packed bytes: {:?}", &packed[..]);
}

fn round_trip_fen(fen: &str) {
    let pos = Position::from_fen(fen).unwrap();
    round_trip(&pos);
    assert_eq!(pos.fen(), fen);
}

#[test]
fn start_position() {
    round_trip(&Position::start_pos());
}

#[test]
fn empty_board() {
    round_trip(&Position::empty());
}

#[test]
fn known_fens() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1",
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        "rnbqkbnr/ppp1pppp/8/3p4/8/5N2/PPPPPPPP/RNBQKB1R w KQkq d6 0 1",
        "r1bqkbnr/pppppppp/2n5/8/8/5N2/PPPPPPPP/RNBQKB1R w KQkq - 0 1",
        "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        "r3k2r/8/8/8/8/8/8/R3K2R b Kq - 0 1",
        "r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1",
        "4k3/8/8/8/8/8/8/4K3 b - - 0 1",
        "8/8/8/8/8/8/8/8 w - - 0 1",
        "4k2r/6K1/8/8/8/8/8/8 w k - 0 1",
        "8/5k2/3p4/1p1Pp2p/pP2Pp1P/P4P1K/8/8 b - - 0 1",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 1",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 0 1",
    ];
    for fen in fens.iter() {
        round_trip_fen(fen);
    }
}

#[test]
fn ep_both_colors() {
    // white just pushed, black to move
    let w = Position::from_fen("rnbqkbnr/pppppppp/8/8/2P5/8/PP1PPPPP/RNBQKBNR b KQkq c3 0 1")
        .unwrap();
    round_trip(&w);
    // black just pushed, white to move
    let b = Position::from_fen("rnbqkbnr/pp1ppppp/8/2p5/8/8/PPPPPPPP/RNBQKBNR w KQkq c6 0 1")
        .unwrap();
    round_trip(&b);
}

#[test]
fn partial_castling_sets() {
    for castling in ["K", "Q", "k", "q", "KQ", "kq", "Kk", "Qq", "KQk", "Kkq"].iter() {
        let fen = format!("r3k2r/8/8/8/8/8/8/R3K2R w {} - 0 1", castling);
        let pos = Position::from_fen(&fen).unwrap();
        round_trip(&pos);
        assert_eq!(pos.castling().pretty_string(), *castling);
    }
}

#[test]
fn rook_off_corner_loses_no_information() {
    // eligible rook on a1, plain rook on d1
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/R2RK3 w Q - 0 1").unwrap();
    let back = decode(&encode(&pos).unwrap()).unwrap();
    assert_eq!(back.castle_rook_squares(), pos.castle_rook_squares());
    round_trip(&pos);
}

#[test]
fn random_positions_plain() {
    for pos in RandPosition::new().pseudo_random(70226306601721).many(200) {
        round_trip(&pos);
    }
}

#[test]
fn random_positions_full_state() {
    let positions = RandPosition::new()
        .pseudo_random(9000110388)
        .with_castling()
        .with_en_passant()
        .many(200);
    for pos in positions {
        round_trip(&pos);
    }
}

#[test]
fn random_positions_sparse() {
    for pos in RandPosition::new().pseudo_random(36).max_pieces(5).many(100) {
        round_trip(&pos);
    }
}

#[test]
fn fen_survives_the_wire() {
    let positions = RandPosition::new()
        .pseudo_random(43259874)
        .with_castling()
        .many(50);
    for pos in positions {
        let back = decode(&encode(&pos).unwrap()).unwrap();
        assert_eq!(back.fen(), pos.fen());
    }
}
