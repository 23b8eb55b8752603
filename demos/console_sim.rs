//! Interactive console simulation.
//!
//! Runs the full command loop against simulated hardware: type jog, state or
//! G-code commands on stdin and watch the controller's responses. Limit
//! switches can be toggled with the extra `SIM LIMX` / `SIM LIMY` lines.

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use jog_trainer::hal::StdoutConsole;
use jog_trainer::{
    Actuator, Calibration, Clock, DateTime, Direction, FeedRate, Indicator, JogTrainer,
    LimitSwitch, SafetyState,
};

/// Actuator that narrates pulse trains instead of driving pins.
struct SimStepper {
    axis: char,
}

impl Actuator for SimStepper {
    fn enable(&mut self) {}

    fn disable(&mut self) {}

    fn step(&mut self, direction: Direction, count: u32, _pulse_delay_us: u32) {
        // Single interpolation steps would flood the terminal; only report
        // the larger trains (jogs).
        if count > 1 {
            let sign = if direction == Direction::Positive { '+' } else { '-' };
            println!("[{} axis] {}{} steps", self.axis, sign, count);
        }
    }
}

/// Limit switch toggled from the keyboard.
#[derive(Clone)]
struct SimSwitch {
    pressed: Rc<Cell<bool>>,
}

impl SimSwitch {
    fn new() -> Self {
        Self {
            pressed: Rc::new(Cell::new(false)),
        }
    }

    fn toggle(&self) -> bool {
        let now = !self.pressed.get();
        self.pressed.set(now);
        now
    }
}

impl LimitSwitch for SimSwitch {
    fn is_pressed(&mut self) -> bool {
        self.pressed.get()
    }
}

struct SimBuzzer;

impl Indicator for SimBuzzer {
    fn beep(&mut self, duration_ms: u32) {
        println!("[buzzer] beep {} ms", duration_ms);
    }
}

/// Fixed demo clock; a real build would back this with an RTC.
struct DemoClock;

impl Clock for DemoClock {
    fn now(&mut self) -> DateTime {
        DateTime {
            year: 2025,
            month: 1,
            day: 1,
            hour: 12,
            minute: 0,
            second: 0,
        }
    }
}

/// Delay provider that skips the waits so simulated moves finish instantly.
struct NoDelay;

impl embedded_hal::delay::DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fn main() {
    let safety = SafetyState::new();
    let limit_x = SimSwitch::new();
    let limit_y = SimSwitch::new();

    let mut trainer = JogTrainer::builder()
        .stepper_x(SimStepper { axis: 'X' })
        .stepper_y(SimStepper { axis: 'Y' })
        .limit_x(limit_x.clone())
        .limit_y(limit_y.clone())
        .buzzer(SimBuzzer)
        .clock(DemoClock)
        .delay(NoDelay)
        .console(StdoutConsole)
        .safety(&safety)
        .calibration(Calibration::new(80.0, 80.0, FeedRate(600.0)))
        .build()
        .expect("simulated trainer should build");

    println!("jog-trainer console simulation");
    println!("Commands: X+/X-/Y+/Y- LIM? BUZ CLOCK FEEDHOLD PAUSE CYCLE RESET HOME G0/G1");
    println!("Simulation extras: SIM LIMX / SIM LIMY toggle a limit switch, QUIT exits");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        let upper = line.trim().to_ascii_uppercase();
        match upper.as_str() {
            "QUIT" | "EXIT" => break,
            "SIM LIMX" => {
                println!("[sim] X limit now {}", if limit_x.toggle() { "PRESSED" } else { "OPEN" });
            }
            "SIM LIMY" => {
                println!("[sim] Y limit now {}", if limit_y.toggle() { "PRESSED" } else { "OPEN" });
            }
            _ => trainer.handle_line(line),
        }

        let pos = trainer.position();
        println!("[pos] X={} Y={} steps", pos.x.value(), pos.y.value());
    }
}
