use crate::{
    engine::{CasEngine, MathEngine},
    error::Failure,
    handler,
    intent::{self, Intent},
    question::{NormalizedQuestion, Question},
    response::Response,
};
use tracing::{debug, info, trace};

/// The stages a submission moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Nothing has been submitted yet.
    Idle,

    /// The question is being classified.
    Classifying,

    /// A handler is waiting on the math capability.
    AwaitingExternalResult(Intent),

    /// The handler failed; the response will be the help message.
    Failed,

    /// The response is ready. A new submission starts over at [`State::Classifying`].
    Formatted,
}

/// Answers math questions, one submission at a time.
///
/// The assistant holds the current question and its response, both replaced on every submission.
///
/// ```
/// use cas_assistant::Assistant;
///
/// let mut assistant: Assistant = Assistant::default();
/// assert_eq!(assistant.submit("2 + 2").as_str(), "The result is: 4");
/// assert_eq!(assistant.submit("derivative of x^2").as_str(), "The derivative of x^2 is:\n2 * x");
/// ```
#[derive(Debug)]
pub struct Assistant<E = CasEngine> {
    engine: E,
    question: Question,
    response: Response,
    state: State,
    last_failure: Option<Failure>,
}

impl Default for Assistant<CasEngine> {
    fn default() -> Self {
        Self::new(CasEngine)
    }
}

impl<E: MathEngine> Assistant<E> {
    /// Creates an assistant that delegates to the given math capability.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            question: Question::default(),
            response: Response::empty(),
            state: State::Idle,
            last_failure: None,
        }
    }

    fn transition(&mut self, state: State) {
        trace!(from = ?self.state, to = ?state, "state transition");
        self.state = state;
    }

    fn finish(&mut self, response: Response) -> &Response {
        self.response = response;
        self.transition(State::Formatted);
        &self.response
    }

    /// Answers the question, replacing the current question and response.
    pub fn submit(&mut self, text: &str) -> &Response {
        self.question = Question::new(text);
        self.last_failure = None;

        if self.question.is_blank() {
            debug!("blank question");
            return self.finish(Response::blank_prompt());
        }

        self.transition(State::Classifying);
        let normalized = NormalizedQuestion::from(&self.question);
        let intent = intent::classify(&normalized.matching);
        info!(%intent, question = %text, "classified question");

        self.transition(State::AwaitingExternalResult(intent));
        match handler::dispatch(&self.engine, intent, &normalized) {
            Ok(response) => self.finish(response),
            Err(failure) => {
                self.transition(State::Failed);
                debug!(%failure, "collapsing failure to the help message");
                self.last_failure = Some(failure);
                self.finish(Response::help())
            },
        }
    }

    /// Returns the current question.
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Returns the current response.
    pub fn response(&self) -> &Response {
        &self.response
    }

    /// Returns the current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the failure behind the current response, if the response is the help message
    /// because a handler failed.
    pub fn last_failure(&self) -> Option<&Failure> {
        self.last_failure.as_ref()
    }
}
