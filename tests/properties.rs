use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use rustc_hash::FxHashSet;

use frontier_search::algorithms::Algorithm;
use frontier_search::algorithms::FrontierSearch;
use frontier_search::algorithms::SearchError;
use frontier_search::algorithms::SearchOutcome;
use frontier_search::algorithms::Termination;
use frontier_search::algorithms::search;
use frontier_search::distance::Distance;
use frontier_search::heuristic::Heuristic;
use frontier_search::heuristic::Metric;
use frontier_search::heuristic::SpatialHeuristic;
use frontier_search::heuristic::ZeroHeuristic;
use frontier_search::problems::grid::Connectivity;
use frontier_search::problems::grid::GridCell;
use frontier_search::problems::grid::GridProblem;
use frontier_search::problems::grid::GridSpace;
use frontier_search::problems::grid::RandomGrid;
use frontier_search::problems::network::Junction;
use frontier_search::problems::network::Network;
use frontier_search::space::Space;

const SEEDS: u64 = 16;

fn instances(rows: usize, cols: usize, connectivity: Connectivity) -> Vec<GridProblem> {
    let config = RandomGrid {
        rows,
        cols,
        walls: 0.3,
        hazards: 0.2,
    };
    (0..SEEDS)
        .filter_map(|seed| config.generate(&mut ChaCha8Rng::seed_from_u64(seed)))
        .map(|p| p.with_connectivity(connectivity))
        .collect()
}

/// The metric that never overestimates under each movement rule.
fn admissible(connectivity: Connectivity) -> Metric {
    match connectivity {
        Connectivity::Four => Metric::Manhattan,
        Connectivity::Eight => Metric::Diagonal,
    }
}

fn run(problem: &GridProblem, algorithm: Algorithm) -> SearchOutcome<GridCell, Distance> {
    let heuristic = SpatialHeuristic::on_plane(admissible(problem.space().connectivity()));
    search(
        problem.space(),
        &heuristic,
        problem.start(),
        problem.goal(),
        algorithm,
    )
    .unwrap()
}

fn cheapest(space: &GridSpace, start: GridCell, goal: GridCell) -> SearchOutcome<GridCell, Distance> {
    search(space, &ZeroHeuristic, start, goal, Algorithm::AStar).unwrap()
}

#[test]
fn runs_are_deterministic() {
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        for problem in instances(16, 16, connectivity) {
            for algorithm in Algorithm::ALL {
                assert_eq!(run(&problem, algorithm), run(&problem, algorithm));
            }
        }
    }
}

#[test]
fn traces_expand_each_node_once() {
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        for problem in instances(16, 16, connectivity) {
            for algorithm in Algorithm::ALL {
                let outcome = run(&problem, algorithm);
                let unique: FxHashSet<GridCell> = outcome.visited.iter().copied().collect();
                assert_eq!(unique.len(), outcome.visited.len(), "{algorithm}");
                assert!(!unique.contains(&problem.goal()), "{algorithm}");
                assert_eq!(outcome.stats.expanded, outcome.visited.len());
            }
        }
    }
}

#[test]
fn paths_connect_start_to_goal() {
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        for problem in instances(16, 16, connectivity) {
            for algorithm in Algorithm::ALL {
                let outcome = run(&problem, algorithm);
                if !outcome.found() {
                    continue;
                }
                assert_eq!(outcome.path.start(), Some(&problem.start()));
                assert_eq!(outcome.path.goal(), Some(&problem.goal()));
                assert_eq!(problem.space().path_cost(&outcome.path), Ok(outcome.cost));
                let unique: FxHashSet<GridCell> = outcome.path.iter().copied().collect();
                assert_eq!(unique.len(), outcome.path.len(), "{algorithm} revisits a cell");
            }
        }
    }
}

#[test]
fn unreachable_goals_exhaust_the_same_region() {
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        for problem in instances(16, 16, connectivity) {
            let outcomes = Algorithm::ALL.map(|a| run(&problem, a));
            let found = outcomes[0].found();
            assert!(outcomes.iter().all(|o| o.found() == found));
            if found {
                continue;
            }

            let region: FxHashSet<GridCell> = outcomes[0].visited.iter().copied().collect();
            for outcome in &outcomes {
                assert_eq!(outcome.termination, Termination::FrontierEmpty);
                assert!(outcome.path.is_empty());
                assert_eq!(outcome.cost, Distance::ZERO);
                let visited: FxHashSet<GridCell> = outcome.visited.iter().copied().collect();
                assert_eq!(visited, region);
            }
        }
    }
}

#[test]
fn astar_finds_the_cheapest_path() {
    for connectivity in [Connectivity::Four, Connectivity::Eight] {
        for problem in instances(24, 24, connectivity) {
            let astar = run(&problem, Algorithm::AStar);
            let reference = cheapest(problem.space(), problem.start(), problem.goal());
            assert_eq!(astar.found(), reference.found());
            assert_eq!(astar.cost, reference.cost);

            for algorithm in Algorithm::ALL {
                let outcome = run(&problem, algorithm);
                if outcome.found() {
                    assert!(astar.cost <= outcome.cost, "{algorithm} beat A*");
                }
            }
        }
    }
}

#[test]
fn astar_explores_no_more_than_dijkstra() {
    for problem in instances(24, 24, Connectivity::Four) {
        let astar = run(&problem, Algorithm::AStar);
        let reference = cheapest(problem.space(), problem.start(), problem.goal());
        if astar.found() {
            assert!(astar.visited.len() <= reference.visited.len());
        }
    }
}

#[test]
fn heuristics_never_overestimate() {
    let cases = [
        (Connectivity::Four, Metric::Manhattan),
        (Connectivity::Four, Metric::Euclidean),
        (Connectivity::Four, Metric::Diagonal),
        (Connectivity::Eight, Metric::Diagonal),
    ];
    for (connectivity, metric) in cases {
        let heuristic = SpatialHeuristic::on_plane(metric);
        for problem in instances(8, 8, connectivity).into_iter().take(4) {
            let space = problem.space();
            let goal = problem.goal();
            for n in space.floors() {
                let reference = cheapest(space, n, goal);
                if reference.found() {
                    let h = heuristic.h(&n, &goal);
                    assert!(
                        h <= reference.cost,
                        "{metric} on {connectivity}: h({n})={h} > {}",
                        reference.cost
                    );
                }
            }
        }
    }
}

#[test]
fn spaces_are_shared_across_threads() {
    let problem = instances(32, 32, Connectivity::Eight)
        .into_iter()
        .find(|p| run(p, Algorithm::BreadthFirst).found())
        .unwrap();
    let network: Network = "4\n0 1 1\n1 2 1\n2 3 1\n0 3 5\n".parse().unwrap();

    let sequential = Algorithm::ALL.map(|a| run(&problem, a));
    let sequential_network =
        Algorithm::ALL.map(|a| search(&network, &ZeroHeuristic, Junction(0), Junction(3), a).unwrap());

    std::thread::scope(|s| {
        let grids: Vec<_> = Algorithm::ALL
            .into_iter()
            .map(|a| {
                let problem = &problem;
                s.spawn(move || run(problem, a))
            })
            .collect();
        let networks: Vec<_> = Algorithm::ALL
            .into_iter()
            .map(|a| {
                let network = &network;
                s.spawn(move || search(network, &ZeroHeuristic, Junction(0), Junction(3), a).unwrap())
            })
            .collect();

        for (handle, expected) in grids.into_iter().zip(&sequential) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
        for (handle, expected) in networks.into_iter().zip(&sequential_network) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn endpoints_must_belong_to_the_space() {
    let heuristic = SpatialHeuristic::on_plane(Metric::Manhattan);
    let space = GridSpace::open(2, 2);
    let outside = GridCell::new(5, 5);
    for algorithm in Algorithm::ALL {
        assert_eq!(
            search(&space, &heuristic, outside, GridCell::new(0, 0), algorithm),
            Err(SearchError::UnknownStart(outside))
        );
        assert_eq!(
            search(&space, &heuristic, GridCell::new(0, 0), outside, algorithm),
            Err(SearchError::UnknownGoal(outside))
        );
    }

    let problem: GridProblem = "S1/0G".parse().unwrap();
    let wall = GridCell::new(0, 1);
    assert_eq!(
        search(
            problem.space(),
            &heuristic,
            problem.start(),
            wall,
            Algorithm::AStar
        ),
        Err(SearchError::UnknownGoal(wall))
    );

    let network: Network = "3\n0 1 1\n".parse().unwrap();
    assert_eq!(
        search(
            &network,
            &ZeroHeuristic,
            Junction(3),
            Junction(0),
            Algorithm::BreadthFirst
        ),
        Err(SearchError::UnknownStart(Junction(3)))
    );
    // Isolated junctions are still part of the network.
    let outcome = search(
        &network,
        &ZeroHeuristic,
        Junction(0),
        Junction(2),
        Algorithm::BreadthFirst,
    )
    .unwrap();
    assert_eq!(outcome.termination, Termination::FrontierEmpty);
    assert_eq!(outcome.visited, [Junction(0), Junction(1)]);
}

#[test]
fn interrupt_before_the_first_expansion() {
    let heuristic = SpatialHeuristic::on_plane(Metric::Manhattan);
    let space = GridSpace::open(3, 3);
    for goal in [GridCell::new(0, 0), GridCell::new(2, 2)] {
        for algorithm in Algorithm::ALL {
            let outcome = FrontierSearch::new(&space, &heuristic, GridCell::new(0, 0), goal, algorithm)
                .unwrap()
                .with_interrupt(|| true)
                .run()
                .unwrap();
            assert_eq!(outcome.termination, Termination::Interrupted);
            assert!(outcome.path.is_empty());
            assert!(outcome.visited.is_empty());
            assert_eq!(outcome.stats.popped, 1);
        }
    }
}
