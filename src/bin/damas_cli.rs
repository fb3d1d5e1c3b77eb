// Interface de linha de comandos para jogar damas contra o motor

use std::io::{self, BufRead, Write};

use damas::ai::Difficulty;
use damas::session::{GameMode, GameSession};
use damas::*;

struct DamasCli {
    session: GameSession,
}

impl DamasCli {
    fn new() -> Self {
        DamasCli {
            session: GameSession::new(GameMode::HumanVsAi, Difficulty::Medium),
        }
    }

    fn run(&mut self) {
        self.handle_help();
        self.print_board();

        let stdin = io::stdin();
        self.prompt();
        for line in stdin.lock().lines() {
            let Ok(input) = line else {
                break;
            };
            let parts: Vec<&str> = input.split_whitespace().collect();

            if !parts.is_empty() {
                match parts[0] {
                    "new" => self.handle_new(&parts),
                    "board" => self.print_board(),
                    "moves" => self.handle_moves(),
                    "select" => self.handle_select(&parts),
                    "move" => self.handle_move(&parts),
                    "ai" => self.handle_ai(),
                    "status" => self.handle_status(),
                    "help" => self.handle_help(),
                    "quit" => break,
                    other => println!("Comando desconhecido: {}", other),
                }
            }
            self.prompt();
        }
    }

    fn prompt(&self) {
        print!("{}> ", self.session.current_player());
        let _ = io::stdout().flush();
    }

    fn handle_help(&self) {
        println!("Comandos:");
        println!("  new [hvh|hva|ava] [easy|medium|hard]  nova partida");
        println!("  board                                  mostra o tabuleiro");
        println!("  moves                                  lances legais de quem joga");
        println!("  select <linha> <coluna>                seleciona uma peça");
        println!("  move <linha> <coluna>                  move a peça selecionada");
        println!("  ai                                     a IA joga o seu turno");
        println!("  status                                 estado da partida");
        println!("  quit                                   sair");
    }

    fn handle_new(&mut self, parts: &[&str]) {
        let mode = match parts.get(1).map(|s| s.parse::<GameMode>()) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                println!("{}", e);
                return;
            }
            None => self.session.mode(),
        };
        let difficulty = match parts.get(2).map(|s| s.parse::<Difficulty>()) {
            Some(Ok(difficulty)) => difficulty,
            Some(Err(e)) => {
                println!("{}", e);
                return;
            }
            None => self.session.difficulty(),
        };

        self.session = GameSession::new(mode, difficulty);
        println!("Nova partida: {} ({})", mode, difficulty);
        self.print_board();
    }

    fn handle_moves(&self) {
        let moves = self.session.legal_moves();
        if moves.is_empty() {
            println!("Sem lances legais");
        }
        for (i, mv) in moves.iter().enumerate() {
            println!("  {}. {}", i + 1, mv);
        }
    }

    fn handle_select(&mut self, parts: &[&str]) {
        let Some(position) = parse_position(parts) else {
            return;
        };
        if !self.session.select_piece(position) {
            println!("Não é possível selecionar {}", position);
            return;
        }
        println!("Selecionada {}", position);
        for mv in self.session.selected_moves() {
            println!("  {}", mv);
        }
    }

    fn handle_move(&mut self, parts: &[&str]) {
        let Some(position) = parse_position(parts) else {
            return;
        };
        if self.session.make_human_move(position) {
            self.print_board();
            self.report_game_over();
        } else {
            println!("Lance inválido para {}", position);
        }
    }

    fn handle_ai(&mut self) {
        if !self.session.is_ai_turn() {
            println!("Não é a vez da IA");
            return;
        }
        match self.session.execute_ai_move() {
            Ok(Some(mv)) => {
                println!("IA jogou {}", mv);
                if let Some(stats) = self
                    .session
                    .ai_player(!self.session.current_player())
                    .and_then(|ai| ai.get_last_statistics())
                {
                    println!("  nós: {} | tempo: {:.2}ms", stats.nodes_visited, stats.time_elapsed.as_secs_f64() * 1000.0);
                }
                self.print_board();
                self.report_game_over();
            }
            Ok(None) => println!("A IA não tem lances"),
            Err(e) => eprintln!("Erro: {}", e),
        }
    }

    fn handle_status(&self) {
        println!("{}", self.session);
        if let Some(mv) = self.session.last_move() {
            println!("Último lance: {}", mv);
        }
        let board = self.session.board();
        println!(
            "Vermelhas: {} ({} damas) | Pretas: {} ({} damas)",
            board.count_pieces(Color::Red),
            board.count_kings(Color::Red),
            board.count_pieces(Color::Black),
            board.count_kings(Color::Black)
        );
    }

    fn print_board(&self) {
        println!("{}", self.session.board());
    }

    fn report_game_over(&self) {
        if let Some(color) = self.session.winner() {
            println!("Fim de jogo! Vencedor: {}", color);
        }
    }
}

fn parse_position(parts: &[&str]) -> Option<Position> {
    let (Some(row), Some(col)) = (parts.get(1), parts.get(2)) else {
        println!("Uso: {} <linha> <coluna>", parts[0]);
        return None;
    };
    let (Ok(row), Ok(col)) = (row.parse::<i32>(), col.parse::<i32>()) else {
        println!("Coordenadas devem ser números");
        return None;
    };
    match Position::new(row, col) {
        Ok(position) => Some(position),
        Err(e) => {
            println!("{}", e);
            None
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = DamasCli::new();
    cli.run();
}
