#[cfg(test)]
mod tests {
    use life_board::{Board, Cell, Event, Game, GameState, Viewport};
    use std::sync::mpsc::{self, Receiver};
    use std::time::{Duration, Instant};

    const SEED: u64 = 42;
    const TIMEOUT: Duration = Duration::from_secs(5);

    fn game_with_glider() -> Game {
        glider_game(|| {})
    }

    fn glider_game(on_ready: impl Fn() + Send + 'static) -> Game {
        let mut game = Game::new(Board::with_seed(Viewport::default(), SEED), on_ready);
        game.handle(Event::Resized {
            width: 200,
            height: 200,
        });
        for (x, y) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
            let (px, py) = game.board().viewport().cell_to_pixel(Cell::new(x, y));
            game.handle(Event::PointerReleased {
                x: px as i32,
                y: py as i32,
            });
        }
        game
    }

    fn run_one_move(game: &mut Game) {
        game.handle(Event::Tick);
        assert!(game.wait_for_generation(TIMEOUT), "no generation arrived");
    }

    #[test]
    fn glider_moves_on_the_stepper_thread() {
        let mut game = game_with_glider();
        game.handle(Event::Play);
        for _ in 0..4 {
            run_one_move(&mut game);
        }
        assert_eq!(game.generation(), 4);
        assert_eq!(
            game.board().cells().sorted(),
            vec![
                Cell::new(2, 1),
                Cell::new(3, 2),
                Cell::new(1, 3),
                Cell::new(2, 3),
                Cell::new(3, 3)
            ]
        );
    }

    fn notified_game() -> (Game, Receiver<()>) {
        let (ready_tx, ready_rx) = mpsc::channel();
        let game = glider_game(move || {
            let _ = ready_tx.send(());
        });
        (game, ready_rx)
    }

    #[test]
    fn each_move_wakes_the_ui() {
        let (mut game, ready) = notified_game();
        game.handle(Event::SetMovesPerSecond(1));
        game.handle(Event::Play);
        for generation in 1..=3 {
            game.handle(Event::Tick);
            ready.recv_timeout(TIMEOUT).expect("no wake-up after the move");
            game.update(Instant::now());
            assert_eq!(game.generation(), generation);
        }
    }

    #[test]
    fn one_move_in_flight_at_a_time() {
        let mut game = game_with_glider();
        game.handle(Event::Play);
        game.handle(Event::Tick);
        game.handle(Event::Tick);
        assert!(game.wait_for_generation(TIMEOUT));
        assert!(!game.wait_for_generation(Duration::from_millis(50)));
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn stop_discards_the_pending_move() {
        let mut game = game_with_glider();
        game.handle(Event::Play);
        game.handle(Event::Tick);
        game.handle(Event::Stop);
        assert!(game.wait_for_generation(TIMEOUT));
        assert_eq!(game.state(), GameState::Stopped);
        assert_eq!(game.generation(), 0);
        assert_eq!(game.board().population(), 5);
    }

    #[test]
    fn update_drives_the_simulation() {
        let mut game = game_with_glider();
        game.handle(Event::SetMovesPerSecond(20));
        game.handle(Event::Play);

        let deadline = Instant::now() + TIMEOUT;
        while game.generation() < 3 && Instant::now() < deadline {
            game.update(Instant::now());
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(game.generation() >= 3);
        assert_eq!(game.board().population(), 5);
    }
}
