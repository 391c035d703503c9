//! 結合テスト: CPU同士の対戦が終局まで進み、公開 API の不変条件が保たれることを確認する。

/// 統合テスト本体。
#[cfg(test)]
mod tests {
    use othello_core::ai::types::Ai;
    use othello_core::engine::notation;
    use othello_core::logging::{InitError, LogFormat, try_init};
    use othello_core::{ai, engine};
    use tracing::Level;

    /// JSON ログを有効にする（他テストが登録済みなら何もしない）。
    fn init_logging() {
        let installed = try_init(LogFormat::Json, Level::DEBUG);
        assert!(installed.is_ok() || matches!(installed, Err(InitError::AlreadyInstalled(_))));
    }

    /// 盤面上の石の数を数える。
    fn occupied(board: &engine::Board) -> u32 {
        let mut count = 0_u32;
        for piece in board.cells().iter().flatten() {
            if *piece != engine::Piece::Empty {
                count += 1;
            }
        }
        count
    }

    /// 2人の AI で終局まで対戦させ、最終的なセッションを返す。
    fn play_out(black: &mut ai::Player, white: &mut ai::Player) -> engine::Session {
        let mut session = engine::Session::new();

        // リバーシは最大60手（最初の4石を除く）だが、パスもあるので余裕を見て回す。
        for _turn in 0_u16..200 {
            if session.is_terminal() {
                break;
            }

            let board = *session.board();
            let mv = match session.side_to_move() {
                engine::Color::Black => black.select_move(&board),
                engine::Color::White => white.select_move(&board),
                _ => engine::Move::Pass,
            };

            let total_before = session.score().0 + session.score().1;
            let play_result = session.play(mv);
            assert!(play_result.is_ok(), "play must succeed, mv={mv} got={play_result:?}");

            let (black_count, white_count) = session.score();
            if mv == engine::Move::Pass {
                assert_eq!(black_count + white_count, total_before);
            } else {
                assert_eq!(black_count + white_count, total_before + 1);
            }
            assert_eq!(black_count + white_count, occupied(session.board()));
        }

        assert!(session.is_terminal(), "game did not finish within turn limit");
        session
    }

    /// 終局したセッションの整合性を確認する。
    fn assert_finished_consistently(session: &engine::Session) {
        let (black, white) = session.score();
        assert!(black + white <= 64, "total stones must be <= 64");
        assert_eq!(
            session.status(),
            engine::GameStatus::GameOver { black, white }
        );

        let expected = match black.cmp(&white) {
            core::cmp::Ordering::Greater => engine::Piece::Black,
            core::cmp::Ordering::Less => engine::Piece::White,
            core::cmp::Ordering::Equal => engine::Piece::Empty,
        };
        assert_eq!(session.winner(), expected);

        // 棋譜の石を置いた手は 60 手以下で、直前の手と手番が交互になる。
        let placed = session
            .history()
            .iter()
            .filter(|record| record.mv != engine::Move::Pass)
            .count();
        assert_eq!(u32::try_from(placed).ok(), Some(black + white - 4));
        for pair in session.history().windows(2) {
            if let [first, second] = pair {
                assert_eq!(first.color.opponent(), second.color);
            }
        }
    }

    /// `easy vs hard` が終局まで進む。
    #[test]
    fn easy_vs_hard_finishes() {
        init_logging();
        let mut black = ai::Player::with_seed(ai::Difficulty::Easy, engine::Color::Black, 42);
        let mut white = ai::Player::with_depth(ai::Difficulty::Hard, engine::Color::White, 2);
        let session = play_out(&mut black, &mut white);
        assert_finished_consistently(&session);
    }

    /// `easy` 同士で終局する。
    #[test]
    fn easy_vs_easy_finishes() {
        init_logging();
        for (seed_black, seed_white) in [(0_u64, 1_u64), (42, 4242), (7, 7)] {
            let mut black =
                ai::Player::with_seed(ai::Difficulty::Easy, engine::Color::Black, seed_black);
            let mut white =
                ai::Player::with_seed(ai::Difficulty::Easy, engine::Color::White, seed_white);
            let session = play_out(&mut black, &mut white);
            assert_finished_consistently(&session);
        }
    }

    /// `medium vs easy` は決定的ではないが、必ず終局する。
    #[test]
    fn medium_vs_easy_finishes() {
        init_logging();
        let mut black = ai::Player::new(ai::Difficulty::Medium, engine::Color::Black);
        let mut white = ai::Player::new(ai::Difficulty::Easy, engine::Color::White);
        let session = play_out(&mut black, &mut white);
        assert_finished_consistently(&session);
    }

    /// 乱数を使わない対戦は同じ棋譜を再現する。
    #[test]
    fn medium_vs_hard_is_reproducible() {
        init_logging();
        let run = || {
            let mut black = ai::Player::new(ai::Difficulty::Medium, engine::Color::Black);
            let mut white = ai::Player::with_depth(ai::Difficulty::Hard, engine::Color::White, 1);
            play_out(&mut black, &mut white)
        };
        let first = run();
        let second = run();
        assert_finished_consistently(&first);
        assert_eq!(first.history(), second.history());
    }

    /// 表記で D3 を打つと、(3,3) が返って黒4・白1になる。
    #[test]
    fn notation_drives_the_opening_move() {
        let mut session = engine::Session::new();
        let opening: Vec<String> = session
            .legal_moves()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(opening, ["D3", "C4", "F5", "E6"]);

        let mv = notation::parse("d3");
        assert!(mv.is_ok());
        let mv = mv.unwrap_or(engine::Move::Pass);
        assert_eq!(session.play(mv), Ok(engine::GameStatus::InProgress));

        assert_eq!(session.board().piece_at(2, 3), engine::Piece::Black);
        assert_eq!(session.board().piece_at(3, 3), engine::Piece::Black);
        assert_eq!(session.score(), (4, 1));
        assert_eq!(session.side_to_move(), engine::Color::White);
        assert_eq!(notation::format(-1, -1), "Pass");
        assert_eq!(
            notation::parse("Z9"),
            Err(engine::ParseMoveError::InvalidFormat)
        );
    }

    /// 打てない白は着手を拒否され、パスは受け付けられる。
    #[test]
    fn stuck_white_must_pass() {
        let mut cells = [[engine::Piece::Empty; 8]; 8];
        cells[0][0] = engine::Piece::Black;
        cells[0][1] = engine::Piece::White;
        let board = engine::Board::from_cells(cells, engine::Color::White);
        let mut session = engine::Session::from_board(board);

        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(
                    session.apply_move(row, col),
                    Err(engine::PlayError::IllegalMove)
                );
            }
        }
        assert_eq!(session.pass(), Ok(engine::GameStatus::InProgress));
        assert_eq!(session.side_to_move(), engine::Color::Black);
        assert_eq!(session.consecutive_passes(), 1);
        assert_eq!(session.pass(), Err(engine::PlayError::MoveAvailable));
    }
}
