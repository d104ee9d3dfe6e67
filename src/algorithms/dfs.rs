/// Iterative depth-first traversal over an adjacency table.
///
/// Walks every vertex reachable from `start` that is not yet marked in
/// `visited`, calling `on_enter` when a vertex is first reached (preorder) and
/// `on_exit` once all of its successors are done (postorder). Successors are
/// explored in list order, so the callback sequence is the same as that of the
/// textbook recursive DFS.
///
/// The call stack is replaced by a heap-allocated stack of
/// `(vertex, next successor index)` frames, so depth is bounded only by memory.
///
/// `start` must be in range and unvisited; callers check both.
pub(crate) fn depth_first<Enter, Exit>(
    adjacency: &[Vec<usize>],
    start: usize,
    visited: &mut [bool],
    mut on_enter: Enter,
    mut on_exit: Exit,
) where
    Enter: FnMut(usize),
    Exit: FnMut(usize),
{
    debug_assert!(!visited[start]);

    visited[start] = true;
    on_enter(start);
    let mut frames: Vec<(usize, usize)> = vec![(start, 0)];

    while let Some(frame) = frames.last_mut() {
        let (vertex, next_idx) = *frame;
        match adjacency[vertex].get(next_idx) {
            Some(&successor) => {
                frame.1 += 1;
                if !visited[successor] {
                    visited[successor] = true;
                    on_enter(successor);
                    frames.push((successor, 0));
                }
            }
            None => {
                frames.pop();
                on_exit(vertex);
            }
        }
    }
}
