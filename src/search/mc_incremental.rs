use rand::Rng;
use rand::seq::SliceRandom;

use crate::graph::{GraphInstance, VertexId};
use crate::search::greedy::greedy_append;

/** randomized greedy: repeats `iterations` times the greedy construction of
[`greedy_append`] over a freshly shuffled vertex order.
Returns true at the first trial reaching k vertices.
*/
pub fn monte_carlo_incremental<R:Rng + ?Sized>(inst:&dyn GraphInstance, k:usize, iterations:usize, rng:&mut R) -> bool {
    if k == 0 { return true; }
    if k > inst.nb_vertices() { return false; }
    let mut order:Vec<VertexId> = inst.vertices().collect();
    for _ in 0..iterations {
        order.shuffle(rng);
        if greedy_append(inst, &order, k) {
            return true;
        }
    }
    false
}
