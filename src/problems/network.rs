use std::str::FromStr;

use derive_more::Display;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::distance::Distance;
use crate::distance::DistanceError;
use crate::heuristic::Locate;
use crate::heuristic::Point;
use crate::space::Neighbours;
use crate::space::Node;
use crate::space::Space;
use crate::space::SpaceError;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{_0}")]
pub struct Junction(pub u32);

impl Junction {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
impl Node for Junction {}

impl From<u32> for Junction {
    fn from(j: u32) -> Self {
        Junction(j)
    }
}

/// What to do with pipes that join a junction to itself.
#[derive(Copy, Clone, Debug, Default, Display, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SelfLoops {
    /// Keep them. Searches never follow them.
    #[default]
    #[display("allow")]
    Allow,
    /// Drop them silently.
    #[display("ignore")]
    Ignore,
    /// Fail to build the network.
    #[display("reject")]
    Reject,
}

#[derive(Debug, Error, PartialEq)]
pub enum NetworkError {
    #[error("Pipe #{pipe} reaches junction {junction}, but there are only {junctions}")]
    NodeOutOfRange {
        pipe: usize,
        junction: u32,
        junctions: u32,
    },
    #[error("Pipe #{pipe} has an invalid cost: {source}")]
    InvalidCost { pipe: usize, source: DistanceError },
    #[error("Pipe #{pipe} loops on junction {junction}")]
    SelfLoop { pipe: usize, junction: u32 },
    #[error("Expected {expected} coordinates, one per junction, but found {found}")]
    CoordinateCount { expected: usize, found: usize },
    #[error("Junction {junction} has invalid coordinates {point}")]
    InvalidCoordinate { junction: u32, point: Point },
    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Junctions `0..N` joined by undirected, weighted pipes.
///
/// Every pipe is stored in both directions with the same cost, so neighbours
/// come out in the order their first pipe was given. Parallel pipes are all
/// kept in [`Network::pipes`], but a junction sees each neighbour once, at the
/// cost of the cheapest pipe between them.
///
/// Only junctions touched by a pipe take up room, so huge junction counts cost
/// nothing until pipes reach them.
///
/// ```
/// use frontier_search::problems::network::Junction;
/// use frontier_search::problems::network::Network;
/// use frontier_search::space::Space;
///
/// let network = Network::new(3, &[(0, 1, 2.0), (1, 2, 0.5)]).unwrap();
/// let next: Vec<_> = network.neighbours(&Junction(1)).unwrap().into_iter().map(|(j, _)| j).collect();
/// assert_eq!(next, vec![Junction(0), Junction(2)]);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Network {
    junctions: u32,
    /// Junctions without pipes are left out.
    adjacency: FxHashMap<Junction, Vec<(Junction, Distance)>>,
    pipes: Vec<(Junction, Junction, Distance)>,
}

impl Network {
    pub fn new(junctions: u32, pipes: &[(u32, u32, f64)]) -> Result<Self, NetworkError> {
        Self::with_self_loops(junctions, pipes, SelfLoops::default())
    }

    pub fn with_self_loops(
        junctions: u32,
        pipes: &[(u32, u32, f64)],
        self_loops: SelfLoops,
    ) -> Result<Self, NetworkError> {
        let mut network = Network {
            junctions,
            adjacency: FxHashMap::default(),
            pipes: Vec::with_capacity(pipes.len()),
        };

        for (pipe, &(a, b, cost)) in pipes.iter().enumerate() {
            for junction in [a, b] {
                if junction >= junctions {
                    return Err(NetworkError::NodeOutOfRange {
                        pipe,
                        junction,
                        junctions,
                    });
                }
            }
            let cost = Distance::new(cost)
                .map_err(|source| NetworkError::InvalidCost { pipe, source })?;

            if a == b {
                match self_loops {
                    SelfLoops::Allow => {}
                    SelfLoops::Ignore => continue,
                    SelfLoops::Reject => return Err(NetworkError::SelfLoop { pipe, junction: a }),
                }
            }

            let (a, b) = (Junction(a), Junction(b));
            network.connect(a, b, cost);
            if a != b {
                network.connect(b, a, cost);
            }
            network.pipes.push((a, b, cost));
        }

        Ok(network)
    }

    /// Adds `to` as a neighbour of `from`, or lowers its cost if it already
    /// was one.
    fn connect(&mut self, from: Junction, to: Junction, cost: Distance) {
        let neighbours = self.adjacency.entry(from).or_default();
        match neighbours.iter_mut().find(|(j, _)| *j == to) {
            Some((_, c)) => *c = (*c).min(cost),
            None => neighbours.push((to, cost)),
        }
    }

    /// Number of junctions.
    pub fn len(&self) -> usize {
        self.junctions as usize
    }
    pub fn is_empty(&self) -> bool {
        self.junctions == 0
    }

    /// The kept pipes, in the order they were given.
    pub fn pipes(&self) -> &[(Junction, Junction, Distance)] {
        &self.pipes
    }

    pub fn junctions(&self) -> impl Iterator<Item = Junction> {
        (0..self.junctions).map(Junction)
    }

    #[inline(always)]
    fn pipes_of(&self, j: &Junction) -> &[(Junction, Distance)] {
        self.adjacency.get(j).map_or(&[], Vec::as_slice)
    }
}

impl Space<Junction, Distance> for Network {
    #[inline(always)]
    fn contains(&self, j: &Junction) -> bool {
        j.0 < self.junctions
    }

    fn neighbours(
        &self,
        j: &Junction,
    ) -> Result<Neighbours<Junction, Distance>, SpaceError<Junction>> {
        #[cfg(feature = "coz_profile")]
        coz::scope!("JunctionExpansion");

        if !self.contains(j) {
            return Err(SpaceError::UnknownNode(*j));
        }
        Ok(self.pipes_of(j).iter().copied().collect())
    }

    /// The cheapest pipe between both junctions.
    fn step_cost(
        &self,
        from: &Junction,
        to: &Junction,
    ) -> Result<Distance, SpaceError<Junction>> {
        for j in [from, to] {
            if !self.contains(j) {
                return Err(SpaceError::UnknownNode(*j));
            }
        }
        self.pipes_of(from)
            .iter()
            .find(|(j, _)| j == to)
            .map(|(_, c)| *c)
            .ok_or(SpaceError::NotAdjacent(*from, *to))
    }

    fn size(&self) -> Option<usize> {
        Some(self.len())
    }
}

/// Lines without comments or surrounding whitespace, numbered from 1.
fn content_lines(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or_default().trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn parse_field<T>(line: usize, field: Option<&str>, what: &str) -> Result<T, NetworkError>
where
    T: FromStr,
{
    let field = field.ok_or_else(|| NetworkError::Parse {
        line,
        message: format!("Missing {what}"),
    })?;
    field.parse().map_err(|_| NetworkError::Parse {
        line,
        message: format!("Invalid {what} '{field}'"),
    })
}

impl Network {
    /// Parses the junction count on its own line, then one `a b cost` pipe per
    /// line. `#` starts a comment.
    pub fn parse(s: &str, self_loops: SelfLoops) -> Result<Self, NetworkError> {
        let mut lines = content_lines(s);
        let (line, count) = lines.next().ok_or(NetworkError::Parse {
            line: 1,
            message: "Missing junction count".to_string(),
        })?;
        let junctions: u32 = parse_field(line, Some(count), "junction count")?;

        let mut pipes = vec![];
        for (line, content) in lines {
            let mut fields = content.split_whitespace();
            let a = parse_field(line, fields.next(), "junction")?;
            let b = parse_field(line, fields.next(), "junction")?;
            let cost = parse_field(line, fields.next(), "cost")?;
            if let Some(extra) = fields.next() {
                return Err(NetworkError::Parse {
                    line,
                    message: format!("Unexpected '{extra}' after the cost"),
                });
            }
            pipes.push((a, b, cost));
        }

        Network::with_self_loops(junctions, &pipes, self_loops)
    }
}

impl FromStr for Network {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::parse(s, SelfLoops::default())
    }
}

/// Writes the format it parses.
impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.len())?;
        for (a, b, cost) in &self.pipes {
            writeln!(f, "{a} {b} {cost}")?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Network{{({} junctions, {} pipes)}}",
            self.len(),
            self.pipes.len()
        )
    }
}

/// Where each junction of a network lies, for spatial heuristics.
#[derive(Clone, Debug, PartialEq)]
pub struct Coordinates {
    points: Vec<Point>,
}

impl Coordinates {
    /// Checks there's exactly one finite point per junction.
    pub fn new(junctions: usize, points: Vec<Point>) -> Result<Self, NetworkError> {
        if points.len() != junctions {
            return Err(NetworkError::CoordinateCount {
                expected: junctions,
                found: points.len(),
            });
        }
        if let Some((junction, point)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(NetworkError::InvalidCoordinate {
                junction: junction as u32,
                point: *point,
            });
        }
        Ok(Self { points })
    }

    pub fn for_network(network: &Network, points: Vec<Point>) -> Result<Self, NetworkError> {
        Self::new(network.len(), points)
    }

    /// Parses one `x y` pair per line, in junction order.
    pub fn parse(s: &str, junctions: usize) -> Result<Self, NetworkError> {
        let mut points = vec![];
        for (line, content) in content_lines(s) {
            let mut fields = content.split_whitespace();
            let x = parse_field(line, fields.next(), "x")?;
            let y = parse_field(line, fields.next(), "y")?;
            if let Some(extra) = fields.next() {
                return Err(NetworkError::Parse {
                    line,
                    message: format!("Unexpected '{extra}' after the coordinates"),
                });
            }
            points.push(Point::new(x, y));
        }
        Self::new(junctions, points)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Locate<Junction> for Coordinates {
    #[inline(always)]
    fn locate(&self, j: &Junction) -> Option<Point> {
        self.points.get(j.index()).copied()
    }
}
