//! Test utilities for arena-based testing.
//!
//! This module provides utilities for building graphs in tests without
//! juggling arena lifetimes by hand.

#[cfg(test)]
pub mod test {
    use crate::ir::Graph;
    use bumpalo::Bump;

    /// Test context that owns the arena graphs are built in.
    pub struct TestContext {
        arena: Bump,
    }

    impl TestContext {
        pub fn new() -> Self {
            Self::with_capacity(0)
        }

        /// Create a test context with specified capacity.
        pub fn with_capacity(capacity: usize) -> Self {
            super::super::init_test_logging();
            Self {
                arena: Bump::with_capacity(capacity),
            }
        }

        /// Create an empty graph borrowing this context's arena.
        ///
        /// The returned graph borrows from the TestContext, so the
        /// TestContext must outlive the graph.
        pub fn create_graph(&self) -> Graph<'_> {
            Graph::new(&self.arena)
        }

        /// Bytes allocated in the arena so far.
        pub fn memory_used(&self) -> usize {
            self.arena.allocated_bytes()
        }
    }

    impl Default for TestContext {
        fn default() -> Self {
            Self::new()
        }
    }

    /// Run a test with a temporary arena context.
    pub fn with_test_context<F, R>(f: F) -> R
    where
        F: FnOnce(&TestContext) -> R,
    {
        let ctx = TestContext::new();
        f(&ctx)
    }

    #[test]
    fn test_sized_context_installs_logger() {
        let _ctx = TestContext::with_capacity(16);
        // env_logger keeps at least error output unless told otherwise
        if std::env::var("RUST_LOG").map_or(true, |filter| filter != "off") {
            assert!(log::max_level() > log::LevelFilter::Off);
        }
    }

    #[test]
    fn test_graph_allocates_in_context_arena() {
        let ctx = TestContext::with_capacity(64);
        let before = ctx.memory_used();
        let mut graph = ctx.create_graph();
        let i32_ty = graph.int_type(32).unwrap();
        let x = graph.argument(i32_ty, "a_reasonably_long_argument_name").unwrap();
        graph.instruction(crate::ir::Opcode::Add, i32_ty, &[x, x]).unwrap();
        assert!(ctx.memory_used() >= before);
    }
}
