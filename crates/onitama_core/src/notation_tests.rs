use super::*;

fn start() -> GameState {
    // Ox carries a blue stamp, so Blue opens.
    GameState::with_cards(
        [[Card::Tiger, Card::Crab], [Card::Monkey, Card::Crane]],
        Card::Ox,
    )
    .unwrap()
}

#[test]
fn test_square_text_round_trip() {
    let sq = Square::new(0, 4).unwrap();
    assert_eq!(sq.to_string(), "a1");
    assert_eq!(Square::parse("a1"), Some(sq));
    assert_eq!(Square::parse("E5"), Square::new(4, 0));
    assert_eq!(Square::parse("f1"), None);
    assert_eq!(Square::parse("a6"), None);
}

#[test]
fn test_parse_tiger_jump() {
    let s = start();
    let mv = parse_move(&s, "tiger:a1a3").unwrap();
    assert_eq!(
        mv,
        Move::Place {
            from: Square::new(0, 4).unwrap(),
            to: Square::new(0, 2).unwrap(),
            card: Card::Tiger,
        }
    );
    assert_eq!(move_to_text(mv), "tiger:a1a3");
}

#[test]
fn test_parse_rejects_moves_not_on_offer() {
    let s = start();
    // Monkey belongs to Red.
    assert!(matches!(
        parse_move(&s, "monkey:a1b2"),
        Err(NotationError::IllegalMove(_))
    ));
    // Pass is not allowed while placements exist.
    assert!(matches!(
        parse_move(&s, "tiger:pass"),
        Err(NotationError::IllegalMove(_))
    ));
}

#[test]
fn test_parse_rejects_garbage() {
    let s = start();
    assert!(matches!(
        parse_move(&s, "tiger-a1a3"),
        Err(NotationError::MalformedMove(_))
    ));
    assert!(matches!(
        parse_move(&s, "tiger:a1"),
        Err(NotationError::MalformedMove(_))
    ));
    assert!(matches!(
        parse_move(&s, "yeti:a1a3"),
        Err(NotationError::UnknownCard(_))
    ));
}

#[test]
fn test_play_line_rotates_cards() {
    let s = start();
    let after = play_line(&s, "tiger:a1a3 crane:a5a4").unwrap();
    assert_eq!(after.ply, 2);
    assert_eq!(after.side_to_move, Player::Blue);
    // Blue took Ox for Tiger, Red took Tiger for Crane.
    assert_eq!(after.hand(Player::Blue), [Card::Ox, Card::Crab]);
    assert_eq!(after.hand(Player::Red), [Card::Monkey, Card::Tiger]);
    assert_eq!(after.mid, Card::Crane);
}
