// Motor de Damas - Partida IA vs IA na consola
use std::time::{Duration, Instant};

use clap::Parser;
use crossbeam::channel::{self, RecvTimeoutError};
use log::{info, warn};

use damas::ai::{AiPlayer, Difficulty};
use damas::search::{EvaluatorKind, SearchConfig};
use damas::session::{GameMode, GameSession};
use damas::*;

/// Joga uma partida completa entre duas IAs e mostra cada lance.
#[derive(Parser, Debug)]
#[command(name = "damas", version, about = "Partida de damas IA vs IA")]
struct Args {
    /// Dificuldade das duas IAs (easy, medium, hard)
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Avaliador das vermelhas
    #[arg(long, default_value = "amp")]
    red_eval: EvaluatorKind,

    /// Avaliador das pretas
    #[arg(long, default_value = "piece-count")]
    black_eval: EvaluatorKind,

    /// Limite de meios-lances antes de parar a partida
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Semente para sorteios reprodutíveis
    #[arg(long)]
    seed: Option<u64>,

    /// Threads para a raiz da busca (0 = todos os núcleos)
    #[arg(short, long, default_value_t = 1)]
    threads: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> DamasResult<()> {
    let threads = if args.threads == 0 { num_cpus::get() } else { args.threads };
    let config = SearchConfig { threads, ..SearchConfig::default() };

    let mut session = GameSession::new(GameMode::AiVsAi, args.difficulty);
    session.set_ai_player(
        AiPlayer::with_config(Color::Red, args.red_eval.build(), args.difficulty, config, args.seed)?
            .named("IA Vermelha"),
    );
    session.set_ai_player(
        AiPlayer::with_config(
            Color::Black,
            args.black_eval.build(),
            args.difficulty,
            config,
            args.seed.map(|s| s.wrapping_add(1)),
        )?
        .named("IA Preta"),
    );

    println!("=== DAMAS: {} vs {} ({}) ===\n", args.red_eval, args.black_eval, args.difficulty);
    println!("{}\n", session.board());

    let start = Instant::now();
    while !session.is_game_over() && session.move_count() < args.max_plies {
        let player = session.current_player();
        let label = session.current_ai_player().map(|ai| ai.to_string()).unwrap_or_default();

        let Some(mv) = play_ai_turn(&mut session)? else {
            break;
        };

        println!("{}. {} -> {}", session.move_count(), label, mv);
        if let Some(stats) = session.ai_player(player).and_then(|ai| ai.get_last_statistics()) {
            if stats.random_move {
                println!("   (lance ao acaso)");
            } else {
                println!(
                    "   nós: {} | profundidade: {} | tempo: {:.2}ms",
                    stats.nodes_visited,
                    stats.depth,
                    stats.time_elapsed.as_secs_f64() * 1000.0
                );
            }
        }
        println!("{}\n", session.board());
    }

    println!("=== RESULTADO ===");
    println!("Estado: {}", session.status());
    match session.winner() {
        Some(color) => println!("Vencedor: {}", color),
        None if !session.is_game_over() => {
            warn!("limite de {} meios-lances atingido", args.max_plies);
            println!("Partida interrompida sem vencedor");
        }
        None => println!("Sem vencedor"),
    }
    println!(
        "Lances: {} | Peças: {} vermelhas, {} pretas | Tempo total: {:.2}s",
        session.move_count(),
        session.board().count_pieces(Color::Red),
        session.board().count_pieces(Color::Black),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Corre o turno da IA numa thread de trabalho e vai dando sinal de vida.
fn play_ai_turn(session: &mut GameSession) -> DamasResult<Option<Move>> {
    let outcome = crossbeam::scope(|scope| {
        let (tx, rx) = channel::bounded(1);
        scope.spawn(move |_| {
            let _ = tx.send(session.execute_ai_move());
        });

        loop {
            match rx.recv_timeout(Duration::from_secs(2)) {
                Ok(result) => return Some(result),
                Err(RecvTimeoutError::Timeout) => info!("IA ainda a pensar..."),
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    });

    match outcome {
        Ok(Some(result)) => result,
        _ => Err(DamasError::WorkerPanicked),
    }
}
