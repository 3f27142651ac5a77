//! Strongly connected components (Tarjan) over an index adjacency list.
//!
//! The recursive formulation is simulated with an explicit frame stack, so
//! long chains cannot exhaust the native call stack. Components come out in
//! the order they close (reverse topological order of the condensation) and
//! the members of each component in pop order.

const UNVISITED: usize = usize::MAX;

pub fn tarjan_scc(edges: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut state = TarjanState::new(edges);
    for root in 0..edges.len() {
        if state.index[root] == UNVISITED {
            state.run_from(root);
        }
    }
    state.components
}

/// A component is cyclic when it holds more than one vertex or a self-loop.
pub fn is_cyclic_component(edges: &[Vec<usize>], component: &[usize]) -> bool {
    match component {
        [] => false,
        [only] => edges[*only].contains(only),
        _ => true,
    }
}

struct TarjanState<'a> {
    edges: &'a [Vec<usize>],
    next_index: usize,
    index: Vec<usize>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    // (vertex, cursor into its neighbor list); the parent is the frame below.
    frames: Vec<(usize, usize)>,
    components: Vec<Vec<usize>>,
}

impl<'a> TarjanState<'a> {
    fn new(edges: &'a [Vec<usize>]) -> Self {
        let n = edges.len();
        Self {
            edges,
            next_index: 0,
            index: vec![UNVISITED; n],
            low: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            frames: Vec::new(),
            components: Vec::new(),
        }
    }

    fn discover(&mut self, v: usize) {
        self.index[v] = self.next_index;
        self.low[v] = self.next_index;
        self.next_index += 1;
        self.stack.push(v);
        self.on_stack[v] = true;
        self.frames.push((v, 0));
    }

    fn run_from(&mut self, root: usize) {
        self.discover(root);

        while let Some(&(v, cursor)) = self.frames.last() {
            if let Some(&w) = self.edges[v].get(cursor) {
                let top = self.frames.len() - 1;
                self.frames[top].1 += 1;

                if self.index[w] == UNVISITED {
                    self.discover(w);
                } else if self.on_stack[w] {
                    self.low[v] = self.low[v].min(self.index[w]);
                }
                continue;
            }

            self.frames.pop();

            if self.low[v] == self.index[v] {
                self.close_component(v);
            }

            if let Some(&(parent, _)) = self.frames.last() {
                self.low[parent] = self.low[parent].min(self.low[v]);
            }
        }
    }

    fn close_component(&mut self, root: usize) {
        let mut component = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w] = false;
            component.push(w);
            if w == root {
                break;
            }
        }
        self.components.push(component);
    }
}
