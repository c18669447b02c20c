use crate::constraints::{Constraint, Constraints};

/// Values of `this` outside `other`.
///
/// Bounds are exclusive, so the overlap's own bounds are not part of the
/// overlap and are folded back into the neighbouring piece (`+1` / `-1`).
pub fn constraint_difference(this: &Constraint, other: &Constraint) -> Vec<Constraint> {
    let overlap = this.intersection(other);
    if overlap.is_empty() {
        return vec![*this];
    }

    let before = Constraint::new(this.low(), overlap.low() + 1);
    let after = Constraint::new(overlap.high() - 1, this.high());
    [before, after]
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Ordered-axis difference of two intersecting boxes.
///
/// Axis `i` contributes the pieces of `this[i] - other[i]`, with every
/// earlier axis narrowed to its overlap with `other` and every later axis
/// left as in `this`. Each piece therefore has a distinct first axis on which
/// it leaves `other`, which keeps the pieces pairwise disjoint.
pub fn region_difference(this: &Constraints, other: &Constraints) -> Vec<Constraints> {
    let mut pieces = Vec::new();
    let mut prefix = this.clone();

    for (axis, (own, theirs)) in this.bounds().iter().zip(other.bounds()).enumerate() {
        let overlap = own.intersection(theirs);
        if overlap.is_empty() {
            // `other` misses `this` entirely on this axis
            pieces.push(prefix);
            return pieces;
        }
        for side in constraint_difference(own, theirs) {
            let piece = prefix.with_index(axis, side);
            if !piece.is_empty() {
                pieces.push(piece);
            }
        }
        prefix = prefix.with_index(axis, overlap);
    }

    pieces
}

/// Product of the independent per-axis differences `this[i] - other[i]`.
pub fn per_axis_exclusion(this: &Constraints, other: &Constraints) -> Vec<Constraints> {
    let mut pieces = vec![this.clone()];

    for (axis, (own, theirs)) in this.bounds().iter().zip(other.bounds()).enumerate() {
        let sides: Vec<Constraint> = constraint_difference(own, theirs)
            .into_iter()
            .filter(|side| !side.is_empty())
            .collect();
        pieces = pieces
            .iter()
            .flat_map(|piece| sides.iter().map(move |&side| piece.with_index(axis, side)))
            .collect();
        if pieces.is_empty() {
            break;
        }
    }

    pieces
}
