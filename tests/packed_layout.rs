extern crate fenpack;

use fenpack::{decode, encode, PackError, Position, SQ, PACKED_BYTES};

#[test]
fn packed_is_always_24_bytes() {
    assert_eq!(PACKED_BYTES, 24);
    let packed = encode(&Position::start_pos()).unwrap();
    assert_eq!(packed.len(), PACKED_BYTES);
}

#[test]
fn start_pos_occupancy_bytes() {
    let packed = encode(&Position::start_pos()).unwrap();
    // byte 0 is rank 8, byte 7 is rank 1
    assert_eq!(&packed[..8], &[0xFF, 0xFF, 0, 0, 0, 0, 0xFF, 0xFF]);
}

#[test]
fn start_pos_nibble_stream() {
    let packed = encode(&Position::start_pos()).unwrap();
    let nibble = |slot: usize| {
        let byte = packed[8 + slot / 2];
        if slot % 2 == 0 {
            byte >> 4
        } else {
            byte & 0b1111
        }
    };
    // rank 1 ascending: R N B Q K B N R, corner rooks castling-eligible
    let white_back: [u8; 8] = [13, 1, 2, 4, 5, 2, 1, 13];
    for (slot, code) in white_back.iter().enumerate() {
        assert_eq!(nibble(slot), *code, "slot {}", slot);
    }
    // slots 8-15: white pawns
    for slot in 8..16 {
        assert_eq!(nibble(slot), 0, "slot {}", slot);
    }
    // slots 16-23: black pawns
    for slot in 16..24 {
        assert_eq!(nibble(slot), 6, "slot {}", slot);
    }
    // rank 8 ascending: r n b q k b n r, white to move so the king is plain
    let black_back: [u8; 8] = [14, 7, 8, 10, 11, 8, 7, 14];
    for (i, code) in black_back.iter().enumerate() {
        assert_eq!(nibble(24 + i), *code, "slot {}", 24 + i);
    }
}

#[test]
fn black_to_move_marks_the_king() {
    let white_turn =
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let black_turn =
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
    let pw = encode(&white_turn).unwrap();
    let pb = encode(&black_turn).unwrap();
    // slot 0: white king on e1, slot 1: black king on e8
    assert_eq!(pw[8], 0x5B);
    assert_eq!(pb[8], 0x5F);
}

#[test]
fn double_pushed_pawn_carries_the_ep_target() {
    let pos =
        Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .unwrap();
    let packed = encode(&pos).unwrap();
    // rank 1 fills slots 0-7, the 7 remaining white pawns slots 8-14,
    // so the pawn on e4 lands in slot 15
    let slot_15 = packed[8 + 7] & 0b1111;
    assert_eq!(slot_15, 12);

    let back = decode(&packed).unwrap();
    assert_eq!(back.ep_square(), Some(SQ::E3));
}

#[test]
fn decoded_defaults_without_markers() {
    // plain kings and rooks: no castling, no ep, white to move
    let mut packed = [0u8; 24];
    packed[7] = 0b0001_1001; // a1, d1, e1
    packed[8] = 0x33; // two plain rooks
    packed[9] = 0x50; // white king
    let pos = decode(&packed).unwrap();
    assert!(pos.castle_rook_squares().is_empty());
    assert_eq!(pos.ep_square(), None);
    assert_eq!(pos.castling().pretty_string(), "-");
}

#[test]
fn length_errors() {
    for len in [0usize, 12, 23, 25, 32].iter() {
        let bytes = vec![0u8; *len];
        match decode(&bytes) {
            Err(PackError::InvalidLength { len: l }) => assert_eq!(l, *len),
            _ => panic!("length {} must be rejected", len),
        }
    }
}

#[test]
fn error_messages_name_the_problem() {
    let msg = format!("{}", decode(&[0u8; 12]).unwrap_err());
    assert!(msg.contains("12"));
    assert!(msg.contains("24"));
}
