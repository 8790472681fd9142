use error_strata::{with_resolver, StackFrame, SymbolResolver};
use std::sync::Arc;

pub mod traits;

/// Frames reported by [`fixed_resolver`], innermost first.
pub fn app_frames() -> Vec<StackFrame> {
    vec![
        StackFrame::new("/srv/app/src/handler.rs", 42, "app::handler::load_user").with_pc(0x10),
        StackFrame::new("/srv/app/src/router.rs", 17, "<app::router::Router as app::Route>::dispatch")
            .with_pc(0x20),
        StackFrame::new("/srv/app/src/main.rs", 3, "app::main").with_pc(0x30),
    ]
}

/// Resolver returning [`app_frames`], preceded by capture machinery that must be dropped.
pub fn fixed_resolver() -> Arc<dyn SymbolResolver> {
    Arc::new(|| {
        let mut frames = vec![
            StackFrame::new("backtrace.rs", 331, "std::backtrace::Backtrace::create"),
            StackFrame::new(
                "mod.rs",
                160,
                "error_strata::types::stack_trace::StackTrace::capture_at",
            ),
            StackFrame::new("mod.rs", 56, "error_strata::types::composite_error::CompositeError::new"),
        ];
        frames.extend(app_frames());
        frames
    })
}

/// Runs `f` with every capture resolving to [`app_frames`].
pub fn with_app_stack<R>(f: impl FnOnce() -> R) -> R {
    with_resolver(fixed_resolver(), f)
}

/// Runs `f` with every capture resolving to an empty stack.
pub fn without_stack<R>(f: impl FnOnce() -> R) -> R {
    with_resolver(Arc::new(Vec::<StackFrame>::new), f)
}
