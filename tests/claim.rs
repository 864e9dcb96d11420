use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;
use std::time::Duration;

use board_blink::{Blinker, Error, Lines, Setup, Shutdown};
use embedded_hal::digital::{ErrorType, OutputPin};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Query(u8),
    Claim(u8),
    Write(bool),
}

type Log = Rc<RefCell<Vec<Event>>>;

/// A board whose lines log every call into a shared event list.
struct Board {
    events: Log,
    shutdown: Shutdown,
    stop_after: usize,
}

struct Line {
    events: Log,
    shutdown: Shutdown,
    stop_after: usize,
    writes: usize,
}

impl Board {
    fn new(shutdown: &Shutdown, stop_after: usize) -> Self {
        Board {
            events: Rc::default(),
            shutdown: shutdown.clone(),
            stop_after,
        }
    }

    fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}

impl Lines for Board {
    type Output = Line;

    fn is_output(&self, bcm: u8) -> board_blink::Result<bool> {
        self.events.borrow_mut().push(Event::Query(bcm));
        Ok(false)
    }

    fn claim_output(&mut self, bcm: u8) -> board_blink::Result<Line> {
        self.events.borrow_mut().push(Event::Claim(bcm));
        Ok(Line {
            events: self.events.clone(),
            shutdown: self.shutdown.clone(),
            stop_after: self.stop_after,
            writes: 0,
        })
    }
}

impl Line {
    fn write(&mut self, high: bool) {
        self.events.borrow_mut().push(Event::Write(high));
        self.writes += 1;
        if self.writes >= self.stop_after {
            self.shutdown.trigger();
        }
    }
}

impl ErrorType for Line {
    type Error = Infallible;
}

impl OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.write(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.write(true);
        Ok(())
    }
}

fn fast() -> Blinker {
    Blinker::with_half_period(Duration::from_millis(1))
}

#[test]
fn pin_is_claimed_once_before_the_first_write() {
    let shutdown = Shutdown::new();
    let mut board = Board::new(&shutdown, 4);

    let mut led = Setup::default().claim(&mut board, 31).unwrap();
    assert_eq!(board.events(), [Event::Query(6), Event::Claim(6)]);

    fast().run(&mut led, &shutdown).unwrap();

    assert_eq!(
        board.events(),
        [
            Event::Query(6),
            Event::Claim(6),
            Event::Write(true),
            Event::Write(false),
            Event::Write(true),
            Event::Write(false),
        ]
    );
}

#[test]
fn suppressed_warnings_skip_the_mode_query() {
    let shutdown = Shutdown::new();
    let mut board = Board::new(&shutdown, 1);

    Setup::default().warnings(false).claim(&mut board, 31).unwrap();

    assert_eq!(board.events(), [Event::Claim(6)]);
}

#[test]
fn bad_pin_never_reaches_the_board() {
    let shutdown = Shutdown::new();
    let mut board = Board::new(&shutdown, 1);

    let err = Setup::default().claim(&mut board, 39).err().unwrap();

    assert!(matches!(err, Error::NotGpio { pin: 39 }));
    assert!(board.events().is_empty());
}
