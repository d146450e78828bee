//! Shared harness: drive the engine binary over its UCI pipes.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

pub struct EngineProcess {
    child: Child,
    stdin: ChildStdin,
    lines: Receiver<String>,
}

impl EngineProcess {
    pub fn start() -> EngineProcess {
        let mut child = Command::new(env!("CARGO_BIN_EXE_chess_engine"))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("engine binary spawns");
        let stdin = child.stdin.take().expect("stdin piped");
        let stdout = child.stdout.take().expect("stdout piped");
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            for line in BufReader::new(stdout).lines().map_while(Result::ok) {
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        EngineProcess {
            child,
            stdin,
            lines: rx,
        }
    }

    pub fn send(&mut self, line: &str) {
        writeln!(self.stdin, "{}", line).expect("write to engine");
    }

    /// First line matching the predicate within the deadline, or `None`.
    pub fn expect_line<F: Fn(&str) -> bool>(
        &mut self,
        predicate: F,
        timeout: Duration,
    ) -> Option<String> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let Ok(line) = self.lines.recv_timeout(remaining) else {
                return None;
            };
            let line = line.trim().to_string();
            if predicate(&line) {
                return Some(line);
            }
        }
    }

    pub fn handshake(&mut self) {
        self.send("uci");
        assert!(
            self.expect_line(|l| l == "uciok", Duration::from_secs(5)).is_some(),
            "no uciok after uci"
        );
        self.send("isready");
        assert!(
            self.expect_line(|l| l == "readyok", Duration::from_secs(5)).is_some(),
            "no readyok after isready"
        );
    }

    /// Run a position + go pair and return the bestmove token.
    pub fn bestmove(&mut self, position: &str, go: &str, timeout: Duration) -> Option<String> {
        self.send(position);
        self.send(go);
        let line = self.expect_line(|l| l.starts_with("bestmove "), timeout)?;
        line.split_whitespace().nth(1).map(str::to_string)
    }
}

impl Drop for EngineProcess {
    fn drop(&mut self) {
        let _ = writeln!(self.stdin, "quit");
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
