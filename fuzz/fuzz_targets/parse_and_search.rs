#![no_main]

use libfuzzer_sys::fuzz_target;

use frontier_search::algorithms::Algorithm;
use frontier_search::algorithms::search;
use frontier_search::heuristic::Metric;
use frontier_search::heuristic::SpatialHeuristic;
use frontier_search::heuristic::ZeroHeuristic;
use frontier_search::problems::grid::GridProblem;
use frontier_search::problems::network::Junction;
use frontier_search::problems::network::Network;
use frontier_search::space::Space;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(problem) = GridProblem::parse(text, '\n') {
        let heuristic = SpatialHeuristic::on_plane(Metric::Manhattan);
        for algorithm in Algorithm::ALL {
            let outcome = search(
                problem.space(),
                &heuristic,
                problem.start(),
                problem.goal(),
                algorithm,
            )
            .unwrap();
            if outcome.found() {
                assert_eq!(problem.space().path_cost(&outcome.path), Ok(outcome.cost));
            }
        }
    }

    if let Ok(network) = text.parse::<Network>() {
        if network.is_empty() {
            return;
        }
        let goal = Junction(network.len() as u32 - 1);
        for algorithm in Algorithm::ALL {
            let outcome = search(&network, &ZeroHeuristic, Junction(0), goal, algorithm).unwrap();
            if outcome.found() {
                assert_eq!(network.path_cost(&outcome.path), Ok(outcome.cost));
            }
        }
    }
});
