//! Adaptive execution dispatcher
//!
//! Picks an executor from the configured mode, or from the input size when
//! the mode is [`ExecutionMode::Adaptive`].

use crate::{
    config::EngineConfig,
    error::Result,
    executor::{
        auto_select, ExecutionMode, Executor, ProcessingOutput, SequentialExecutor,
        StreamingExecutor,
    },
    input::Input,
};

#[cfg(feature = "parallel")]
use crate::executor::ParallelExecutor;

/// Adaptive execution dispatcher
#[derive(Debug)]
pub struct AdaptiveDispatcher {
    sequential_executor: SequentialExecutor,
    #[cfg(feature = "parallel")]
    parallel_executor: ParallelExecutor,
    streaming_executor: StreamingExecutor,
    config: EngineConfig,
}

impl AdaptiveDispatcher {
    /// Create a new adaptive dispatcher with the given configuration
    pub fn new(config: EngineConfig) -> Self {
        Self {
            sequential_executor: SequentialExecutor,
            #[cfg(feature = "parallel")]
            parallel_executor: ParallelExecutor::new(config.chunk_policy, config.threads),
            streaming_executor: StreamingExecutor::new(config.stream_window),
            config,
        }
    }

    /// The configuration this dispatcher was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Mode the configured execution mode resolves to for an input size
    ///
    /// Inputs of unknown size are streamed in adaptive mode.
    pub fn select_mode(&self, input_size: Option<usize>) -> ExecutionMode {
        self.resolve(self.config.execution_mode, input_size)
    }

    fn resolve(&self, mode: ExecutionMode, input_size: Option<usize>) -> ExecutionMode {
        match (mode, input_size) {
            (ExecutionMode::Adaptive, Some(size)) => auto_select(size, &self.config),
            (ExecutionMode::Adaptive, None) => ExecutionMode::Streaming,
            (mode, _) => mode,
        }
    }

    /// Process an input with the given mode
    pub fn dispatch(&self, input: Input, mode: ExecutionMode) -> Result<ProcessingOutput> {
        let mode = self.resolve(mode, input.estimated_size());
        tracing::debug!(?mode, size = ?input.estimated_size(), "execution mode selected");

        match mode {
            ExecutionMode::Streaming => self
                .streaming_executor
                .process_reader(input.into_reader()?),
            _ => self.run(&input.into_bytes()?, mode),
        }
    }

    fn run(&self, text: &[u8], mode: ExecutionMode) -> Result<ProcessingOutput> {
        match mode {
            ExecutionMode::Streaming => self.streaming_executor.process(text),
            #[cfg(feature = "parallel")]
            ExecutionMode::Parallel => self.parallel_executor.process(text),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => {
                tracing::debug!("parallel feature disabled, running sequentially");
                self.sequential_executor.process(text)
            }
            ExecutionMode::Sequential | ExecutionMode::Adaptive => {
                self.sequential_executor.process(text)
            }
        }
    }
}

impl Executor for AdaptiveDispatcher {
    fn process(&self, text: &[u8]) -> Result<ProcessingOutput> {
        self.run(text, self.select_mode(Some(text.len())))
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Adaptive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_mode() {
        let dispatcher = AdaptiveDispatcher::new(EngineConfig::default());
        assert_eq!(dispatcher.select_mode(Some(10)), ExecutionMode::Sequential);
        assert_eq!(dispatcher.select_mode(None), ExecutionMode::Streaming);

        let dispatcher = AdaptiveDispatcher::new(EngineConfig::streaming());
        assert_eq!(dispatcher.select_mode(Some(10)), ExecutionMode::Streaming);
    }

    #[test]
    fn test_reader_input_is_streamed() {
        let dispatcher = AdaptiveDispatcher::new(EngineConfig::default());
        let input = Input::from_reader(std::io::Cursor::new(b"One. Two.".to_vec()));
        let output = dispatcher.dispatch(input, ExecutionMode::Adaptive).unwrap();
        assert_eq!(output.metrics.mode_used, ExecutionMode::Streaming);
        assert_eq!(output.boundaries.len(), 9);
    }

    #[test]
    fn test_executor_impl() {
        let dispatcher = AdaptiveDispatcher::new(EngineConfig::default());
        let output = dispatcher.process(b"abc").unwrap();
        assert_eq!(output.metrics.mode_used, ExecutionMode::Sequential);
        assert_eq!(dispatcher.mode(), ExecutionMode::Adaptive);
    }
}
