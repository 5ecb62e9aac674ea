//! Constants used throughout the dotpath library.

/// Maximum number of segments a path may carry before the engine treats it
/// as unresolvable.
///
/// Recursion depth tracks segment count and paths are caller-controlled
/// input, so the traversal refuses to descend past this bound instead of
/// growing the stack without limit. Operations handed a longer path behave
/// as if the path did not match: fetch yields the default, ping yields
/// `false`, and the mutating operations return the tree unchanged.
pub const MAX_PATH_SEGMENTS: usize = 255;
