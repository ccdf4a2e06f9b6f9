use std::env;
use std::process::ExitCode;
use std::time::Instant;

use bitchess::board::{find_best_move, Board, Game, SearchLimits, SearchState, DEFAULT_TT_MB};

const USAGE: &str = "usage: perft <depth> [fen]\n       perft search <depth> [fen]";

fn parse_board(fen: Option<String>) -> Result<Board, String> {
    match fen {
        Some(fen) => Board::try_from_fen(&fen).map_err(|err| err.to_string()),
        None => Ok(Board::new()),
    }
}

fn parse_depth(arg: Option<String>) -> Result<u32, String> {
    let arg = arg.ok_or_else(|| USAGE.to_string())?;
    arg.parse()
        .map_err(|_| format!("invalid depth '{arg}'\n{USAGE}"))
}

fn run_perft(depth: u32, mut board: Board) {
    let start = Instant::now();
    let divided = board.perft_divide(depth as usize);
    let mut total = 0;
    for (mv, nodes) in &divided {
        println!("{mv}: {nodes}");
        total += nodes;
    }
    if depth == 0 {
        total = 1;
    }
    let elapsed = start.elapsed();
    println!();
    println!("nodes: {total}");
    println!("time: {elapsed:?}");
}

fn run_search(depth: u32, board: Board) {
    let mut game = Game::new(board);
    let mut state = SearchState::new(DEFAULT_TT_MB);
    let result = find_best_move(&mut game, &mut state, &SearchLimits::depth(depth));

    let pv: Vec<String> = result.pv.iter().map(ToString::to_string).collect();
    println!(
        "depth {} score {} nodes {} pv {}",
        result.depth,
        result.score,
        result.stats.total_nodes(),
        pv.join(" ")
    );
    match result.best_move {
        Some(mv) => println!("bestmove {mv}"),
        None => println!("bestmove (none)"),
    }
}

fn main() -> ExitCode {
    // Remaining arguments form the FEN, so it need not be quoted.
    let mut args = env::args().skip(1).peekable();
    let search = args.peek().is_some_and(|arg| arg == "search");
    if search {
        args.next();
    }

    let depth = match parse_depth(args.next()) {
        Ok(depth) => depth,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };
    let fen: Vec<String> = args.collect();
    let fen = (!fen.is_empty()).then(|| fen.join(" "));

    let board = match parse_board(fen) {
        Ok(board) => board,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    if search {
        run_search(depth, board);
    } else {
        run_perft(depth, board);
    }
    ExitCode::SUCCESS
}
