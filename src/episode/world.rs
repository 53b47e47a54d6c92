use crate::systems::{Agent, Floor, Obstacle};

/// An agent bound to the pilot (by index into the episode's pilot slice)
/// that steers it and collects its fitness. They live and die together.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seat {
    pub agent: Agent,
    pub pilot: usize,
    alive: bool,
}

impl Seat {
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}

/// Live agents in spawn order. Eliminations only mark a seat; `compact`
/// drops marked seats once the tick is over, so indices stay stable while
/// a tick iterates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    seats: Vec<Seat>,
}

impl Roster {
    /// One agent per pilot, all at `start`.
    pub fn seed(pilots: usize, start: (f64, f64)) -> Self {
        let seats = (0..pilots)
            .map(|pilot| Seat { agent: Agent::new(start.0, start.1), pilot, alive: true })
            .collect();
        Self { seats }
    }

    /// Seats still tracked, including ones marked this tick.
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.seats.iter().filter(|s| s.alive).count()
    }

    pub fn seat(&self, i: usize) -> Option<&Seat> {
        self.seats.get(i)
    }

    /// Mutable agent at `i`, only while it is alive.
    pub fn agent_mut(&mut self, i: usize) -> Option<&mut Agent> {
        self.seats.get_mut(i).filter(|s| s.alive).map(|s| &mut s.agent)
    }

    /// First live agent; the one sensors are measured against.
    pub fn lead(&self) -> Option<&Agent> {
        self.seats.iter().find(|s| s.alive).map(|s| &s.agent)
    }

    /// Mark seat `i` dead and return its pilot, or `None` if already dead.
    pub fn eliminate(&mut self, i: usize) -> Option<usize> {
        let seat = self.seats.get_mut(i).filter(|s| s.alive)?;
        seat.alive = false;
        Some(seat.pilot)
    }

    pub fn live(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(|s| s.alive)
    }

    /// Drop every marked seat. Returns how many went.
    pub fn compact(&mut self) -> usize {
        let before = self.seats.len();
        self.seats.retain(|s| s.alive);
        before - self.seats.len()
    }
}

/// Everything one episode mutates.
#[derive(Clone, Debug, PartialEq)]
pub struct World {
    pub roster: Roster,
    /// Leftmost first.
    pub obstacles: Vec<Obstacle>,
    pub floor: Floor,
    /// Pipes cleared by the flock.
    pub score: u32,
    pub tick: u64,
    pub eliminations: usize,
}

impl World {
    pub fn is_terminal(&self) -> bool {
        self.roster.live_count() == 0
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            tick: self.tick,
            score: self.score,
            floor: self.floor.offsets(),
            floor_y: self.floor.y,
            agents: self
                .roster
                .live()
                .map(|s| AgentView { pilot: s.pilot, x: s.agent.x(), y: s.agent.y, tilt: s.agent.tilt() })
                .collect(),
            obstacles: &self.obstacles,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentView {
    pub pilot: usize,
    pub x: f64,
    pub y: f64,
    pub tilt: f64,
}

/// Read-only picture of the world between ticks, for renderers and loggers.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<'a> {
    pub tick: u64,
    pub score: u32,
    pub floor: (f64, f64),
    pub floor_y: f64,
    pub agents: Vec<AgentView>,
    pub obstacles: &'a [Obstacle],
}
