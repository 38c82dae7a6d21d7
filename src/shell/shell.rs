/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use std::thread::{Builder, JoinHandle};
use std::time::{Duration, Instant};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::ShellConfig;
use crate::dispatcher::Dispatcher;
use crate::shared::{Floor, RequestDirection};
use crate::shell::command::{parse_destinations, Command};

/***************************************/
/*               Enums                 */
/***************************************/
enum Event {
    LineReceived(String),
    Tick,
    InputClosed,
}

#[derive(PartialEq)]
enum Flow {
    Continue,
    Exit,
}

const HELP: &str = "\
Commands:
  <floor> <up|down>            request a pickup, destinations are asked for next
  <floor> <up|down> <d1,d2>    request a pickup with destinations
  status                       advance one step and print every elevator
  step                         advance one step
  help                         show this text
  exit                         leave the simulator";

/**
 * Interactive text front end for the dispatcher.
 *
 * Lines arrive on `line_rx` from a reader thread. The shell owns the dispatcher, so every
 * command runs to completion before the next line or tick is looked at.
 *
 * # Fields
 * - `dispatcher`:          The simulated elevator bank.
 * - `config`:              Shell settings (auto stepping, output format).
 * - `line_rx`:             Receives input lines, disconnects when input ends.
 * - `ticker`:              Fires every auto step interval, never fires when auto stepping is off.
 * - `output`:              Where prompts and results are written.
 * - `pending_request`:     A request waiting for its destinations to be entered.
 */
pub struct Shell<W: Write> {
    dispatcher: Dispatcher,
    config: ShellConfig,
    line_rx: cbc::Receiver<String>,
    ticker: cbc::Receiver<Instant>,
    output: W,
    pending_request: Option<(Floor, RequestDirection)>,
}

/***************************************/
/*             Public API              */
/***************************************/
impl<W: Write> Shell<W> {
    pub fn new(
        dispatcher: Dispatcher,
        config: ShellConfig,
        line_rx: cbc::Receiver<String>,
        output: W,
    ) -> Shell<W> {
        let ticker = match config.auto_step_interval {
            0 => cbc::never(),
            interval => cbc::tick(Duration::from_millis(interval)),
        };

        Shell {
            dispatcher,
            config,
            line_rx,
            ticker,
            output,
            pending_request: None,
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.prompt()?;

        // Main loop
        loop {
            let event = self.wait_for_event();
            if self.handle_event(event)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    // The ticker keeps its own schedule, so input does not hold back auto steps
    fn wait_for_event(&self) -> Event {
        cbc::select! {
            recv(self.line_rx) -> line => line_event(line),
            recv(self.ticker) -> _ => Event::Tick,
        }
    }

    fn handle_event(&mut self, event: Event) -> io::Result<Flow> {
        match event {
            Event::LineReceived(line) => {
                let flow = match self.pending_request.take() {
                    Some((floor, direction)) => {
                        self.handle_destinations(floor, direction, &line)?;
                        Flow::Continue
                    }
                    None => self.handle_line(&line)?,
                };

                if flow == Flow::Continue {
                    self.prompt()?;
                }
                Ok(flow)
            }

            Event::Tick => {
                debug!("Auto step");
                self.dispatcher.step();
                Ok(Flow::Continue)
            }

            Event::InputClosed => {
                info!("Input closed, shutting down");
                Ok(Flow::Exit)
            }
        }
    }

    fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!("Rejected input {:?}: {}", line.trim(), e);
                writeln!(self.output, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Request {
                floor,
                direction,
                destinations: Some(destinations),
            } => self.submit_request(floor, direction, &destinations)?,

            Command::Request {
                floor,
                direction,
                destinations: None,
            } => {
                self.pending_request = Some((floor, direction));
            }

            Command::Status => self.print_status()?,
            Command::Step => self.dispatcher.step(),
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn handle_destinations(
        &mut self,
        floor: Floor,
        direction: RequestDirection,
        line: &str,
    ) -> io::Result<()> {
        match parse_destinations(line) {
            Ok(destinations) => self.submit_request(floor, direction, &destinations),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn submit_request(
        &mut self,
        floor: Floor,
        direction: RequestDirection,
        destinations: &[Floor],
    ) -> io::Result<()> {
        let id = self.dispatcher.handle_request(floor, direction, destinations);
        writeln!(
            self.output,
            "Request added: floor {} going {}, assigned to elevator {}",
            floor, direction, id
        )?;

        if self.config.status_after_request {
            self.print_status()?;
        }
        Ok(())
    }

    fn print_status(&mut self) -> io::Result<()> {
        let report = self.dispatcher.status_report();

        if self.config.json_status {
            writeln!(self.output, "{}", serde_json::to_string_pretty(&report)?)?;
            return Ok(());
        }

        for status in report.iter() {
            writeln!(self.output, "{}", status)?;
        }
        writeln!(self.output, "{}", "-".repeat(50))
    }

    fn prompt(&mut self) -> io::Result<()> {
        match self.pending_request {
            Some(_) => write!(self.output, "Enter destination floor(s) for passenger: ")?,
            None => {
                writeln!(
                    self.output,
                    "Enter a request in the format: [floor] [up/down] or type 'status', 'step', 'help' or 'exit'"
                )?;
                write!(self.output, "Your input: ")?;
            }
        }
        self.output.flush()
    }
}

fn line_event(line: Result<String, cbc::RecvError>) -> Event {
    match line {
        Ok(line) => Event::LineReceived(line),
        Err(_) => Event::InputClosed,
    }
}

/// Forwards stdin line by line until it closes.
pub fn spawn_stdin_reader(line_tx: cbc::Sender<String>) -> io::Result<JoinHandle<()>> {
    Builder::new().name("stdin_reader".into()).spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }
    })
}
