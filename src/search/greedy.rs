use crate::graph::{GraphInstance, VertexId};

/** scans `order` once and appends every vertex adjacent to all the vertices
appended so far. Returns true as soon as the candidate reaches k vertices.
*/
pub fn greedy_append(inst:&dyn GraphInstance, order:&[VertexId], k:usize) -> bool {
    if k == 0 { return true; }
    let mut clique:Vec<VertexId> = Vec::with_capacity(k);
    for u in order {
        if clique.iter().all(|v| inst.are_adjacent(*u, *v)) {
            clique.push(*u);
            if clique.len() == k { return true; }
        }
    }
    false
}

/** vertices sorted by decreasing degree. Ties are broken by increasing vertex id. */
pub fn degree_order(inst:&dyn GraphInstance) -> Vec<VertexId> {
    let mut res:Vec<VertexId> = inst.vertices().collect();
    res.sort_by(|u,v| inst.degree(*v).cmp(&inst.degree(*u)).then_with(|| u.cmp(v)));
    res
}

/** greedy heuristic: a single pass over the vertices by decreasing degree
(see [`degree_order`]), building a clique without backtracking.
Never reports a clique that does not exist, may miss existing ones.
*/
pub fn greedy_clique_search(inst:&dyn GraphInstance, k:usize) -> bool {
    greedy_append(inst, &degree_order(inst), k)
}
