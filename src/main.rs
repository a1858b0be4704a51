use anyhow::Context;
use checkers_planner::core::{initial_board, Color};
use checkers_planner::display::{render_board, DisplayState};
use checkers_planner::game::{Game, GameRecord, PlyResult};
use checkers_planner::player::PlayerKind;
use checkers_planner::selfplay::{run_selfplay, SelfPlayConfig};
use std::path::PathBuf;

const USAGE: &str = "usage:
  checkers-planner play [white] [black] [--save <dir>]
  checkers-planner selfplay <games> [white] [black] [--save <dir>]
  checkers-planner replay <record.json>

players: planner (default), random, weighted";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let save_dir = take_flag(&mut args, "--save")?.map(PathBuf::from);

    match args.first().map(String::as_str) {
        Some("play") | None => {
            let white = player_arg(&args, 1)?;
            let black = player_arg(&args, 2)?;
            run_play(white, black, save_dir)
        }
        Some("selfplay") => {
            let games = args
                .get(1)
                .context(USAGE)?
                .parse::<usize>()
                .context("number of games must be a positive integer")?;
            let stats = run_selfplay(SelfPlayConfig {
                num_games: games,
                white: player_arg(&args, 2)?,
                black: player_arg(&args, 3)?,
                record_dir: save_dir,
            })?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
        Some("replay") => {
            let path = args.get(1).context(USAGE)?;
            run_replay(path)
        }
        Some(other) => anyhow::bail!("unknown command {:?}\n{}", other, USAGE),
    }
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> anyhow::Result<Option<String>> {
    let Some(pos) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    if pos + 1 >= args.len() {
        anyhow::bail!("{} needs a value", flag);
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    Ok(Some(value))
}

fn player_arg(args: &[String], index: usize) -> anyhow::Result<PlayerKind> {
    match args.get(index) {
        Some(s) => s.parse(),
        None => Ok(PlayerKind::Planner),
    }
}

fn run_play(white: PlayerKind, black: PlayerKind, save_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let p1 = white.build(Color::White);
    let p2 = black.build(Color::Black);
    let mut game = Game::new(initial_board());

    println!("=== Checkers: {} vs {} ===", p1.name(), p2.name());
    let mut state = DisplayState::new();
    println!("{}", render_board(&game.board, &state));

    loop {
        let mover = game.current_player;
        match game.step(p1.as_ref(), p2.as_ref())? {
            PlyResult::Moved(mv) => {
                state.status_msg = Some(format!("{}. {} {}", game.plies(), mover, mv));
                state.last_move = Some(mv);
                println!("{}", render_board(&game.board, &state));
            }
            PlyResult::Finished(outcome) => {
                println!("{} after {} plies", outcome, game.plies());
                break;
            }
        }
    }

    if let Some(dir) = save_dir {
        let path = game.record().save(dir, "game")?;
        println!("record saved to {}", path.display());
    }
    Ok(())
}

fn run_replay(path: &str) -> anyhow::Result<()> {
    let record = GameRecord::load(path).with_context(|| format!("failed to read {}", path))?;
    let boards = record.replay()?;

    let mut state = DisplayState::new();
    println!("{}", render_board(&boards[0], &state));
    let mut mover = Color::White;
    for (i, (mv, board)) in record.moves.iter().zip(boards.iter().skip(1)).enumerate() {
        state.status_msg = Some(format!("{}. {} {}", i + 1, mover, mv));
        state.last_move = Some(mv.clone());
        println!("{}", render_board(board, &state));
        mover = mover.opponent();
    }
    match record.outcome {
        Some(outcome) => println!("{}", outcome),
        None => println!("(unfinished)"),
    }
    Ok(())
}
