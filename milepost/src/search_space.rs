use crate::graph::{GeoGraph, Idx};
use crate::spatial::Miles;

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
  cost: Miles,
  id: Idx,
}

impl Ord for State {
  fn cmp(&self, other: &Self) -> Ordering {
    // Sorted desc so the heap pops the cheapest entry first; ties resolve
    // by node id to keep repeated queries reproducible.
    other
      .cost
      .cmp(&self.cost)
      .then_with(|| other.id.cmp(&self.id))
  }
}

impl PartialOrd for State {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Dijkstra frontier: a priority queue of not-yet-finalized vertices plus
/// the best-known cumulative distance and predecessor per reached vertex.
pub(crate) struct SearchSpace {
  pq: BinaryHeap<State>,
  resolved: HashMap<Idx, State>,
}

impl SearchSpace {
  pub fn new() -> Self {
    SearchSpace {
      pq: BinaryHeap::new(),
      resolved: HashMap::new(),
    }
  }

  /// Cheapest not-yet-extracted entry, if any.
  pub fn min(&self) -> Option<(Idx, Miles)> {
    self.pq.peek().map(|state| (state.id, state.cost))
  }

  /// Seeds the frontier with a search origin at zero cost. The origin is
  /// its own predecessor, which is what terminates [`SearchSpace::unwind`].
  pub fn init(&mut self, node: Idx) {
    self.resolve(node, node, Miles::default());
  }

  /// Extracts one frontier vertex and relaxes its neighbors. Returns false
  /// once the frontier is drained.
  pub fn update(&mut self, graph: &GeoGraph) -> bool {
    if let Some(State { cost, id }) = self.pq.pop() {
      if let Some(resolved) = self.resolved.get(&id) {
        if cost > resolved.cost {
          // Stale entry, a cheaper path to `id` was found after the push.
          return true;
        }
      }

      for target in graph.neighbor_ids(id) {
        let path_cost = cost + graph.transition_weight(id, target);
        if let Some(known) = self.resolved.get(&target) {
          if path_cost >= known.cost {
            continue;
          }
        }
        self.resolve(target, id, path_cost);
      }

      return true;
    }
    false
  }

  /// Walks predecessor links back from `node` towards the search origin.
  /// The returned ids are in end-to-start order.
  pub fn unwind(&self, node: Idx) -> Vec<Idx> {
    let mut result = Vec::new();

    let mut current = node;
    while let Some(state) = self.resolved.get(&current) {
      result.push(current);
      if current == state.id {
        break;
      }
      current = state.id;
    }
    result
  }

  fn resolve(&mut self, node: Idx, parent: Idx, cost: Miles) {
    self.resolved.insert(node, State { cost, id: parent });
    self.pq.push(State { cost, id: node });
  }
}
