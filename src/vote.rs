//! Up/down votes on individual results.

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::query::QueryString;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn value(self) -> i8 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

/// Body posted to the vote endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteRequest {
    /// Query the result was shown for
    pub q: String,
    /// Result URL
    pub u: String,
    /// +1 / -1; the opposite sign retracts an earlier vote
    pub v: i8,
}

impl VoteRequest {
    /// `application/x-www-form-urlencoded` body
    pub fn to_form(&self) -> String {
        let mut form = QueryString::new();
        form.set("q", &self.q);
        form.set("u", &self.u);
        form.set("v", &self.v.to_string());
        let serialized = form.serialize();
        serialized.strip_prefix('?').unwrap_or(&serialized).to_owned()
    }
}

/// Transport for vote requests
pub trait VoteSink {
    fn post(&mut self, endpoint: &str, request: &VoteRequest) -> Result<()>;
}

/// A vote sent but not yet acknowledged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVote {
    pub direction: Direction,
    /// The click undid a vote already cast in this direction
    pub retracting: bool,
    pub request: VoteRequest,
}

/// Vote marks of the arrow pair next to one result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ballot {
    url: String,
    marked: Option<Direction>,
}

impl Ballot {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            marked: None,
        }
    }

    pub fn marked(&self) -> Option<Direction> {
        self.marked
    }

    /// Handle a click on the `direction` arrow. Clicking a marked arrow
    /// unmarks it at once and sends the opposite vote.
    pub fn click(&mut self, query: &str, direction: Direction) -> PendingVote {
        let retracting = self.marked == Some(direction);
        let mut v = direction.value();
        if retracting {
            self.marked = None;
            v = -v;
        }
        PendingVote {
            direction,
            retracting,
            request: VoteRequest {
                q: query.to_owned(),
                u: self.url.clone(),
                v,
            },
        }
    }

    /// Apply the endpoint's answer. The other arrow is unmarked either way.
    pub fn settle(&mut self, pending: &PendingVote, outcome: &Result<()>) {
        if self.marked.is_some_and(|marked| marked != pending.direction) {
            self.marked = None;
        }
        match outcome {
            Ok(()) if !pending.retracting => self.marked = Some(pending.direction),
            Ok(()) => {}
            Err(err) => tracing::warn!(url = %self.url, error = %err, "vote failed"),
        }
    }

    /// Click, post to the configured vote endpoint and settle in one step.
    pub fn cast<S: VoteSink + ?Sized>(
        &mut self,
        sink: &mut S,
        config: &Config,
        query: &str,
        direction: Direction,
    ) {
        let pending = self.click(query, direction);
        let outcome = sink.post(&config.vote_endpoint, &pending.request);
        self.settle(&pending, &outcome);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[derive(Default)]
    struct Recorder {
        sent: Vec<VoteRequest>,
        endpoints: Vec<String>,
        fail: bool,
    }

    impl VoteSink for Recorder {
        fn post(&mut self, endpoint: &str, request: &VoteRequest) -> Result<()> {
            self.endpoints.push(endpoint.to_owned());
            self.sent.push(request.clone());
            if self.fail {
                Err(Error::Transport("503".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_vote_up() {
        let config = Config::default();
        let mut sink = Recorder::default();
        let mut ballot = Ballot::new("https://example.com");
        ballot.cast(&mut sink, &config, "cats", Direction::Up);
        assert_eq!(ballot.marked(), Some(Direction::Up));
        assert_eq!(sink.sent[0].v, 1);
    }

    #[test]
    fn test_retract() {
        let config = Config::default();
        let mut sink = Recorder::default();
        let mut ballot = Ballot::new("https://example.com");
        ballot.cast(&mut sink, &config, "cats", Direction::Down);
        ballot.cast(&mut sink, &config, "cats", Direction::Down);
        assert_eq!(ballot.marked(), None);
        assert_eq!(sink.sent[1].v, 1);
    }

    #[test]
    fn test_switch_direction() {
        let config = Config::default();
        let mut sink = Recorder::default();
        let mut ballot = Ballot::new("https://example.com");
        ballot.cast(&mut sink, &config, "cats", Direction::Up);
        ballot.cast(&mut sink, &config, "cats", Direction::Down);
        assert_eq!(ballot.marked(), Some(Direction::Down));
        assert_eq!(sink.sent[1].v, -1);
    }

    #[test]
    fn test_failure_clears_other_arrow() {
        let config = Config::default();
        let mut sink = Recorder::default();
        let mut ballot = Ballot::new("https://example.com");
        ballot.cast(&mut sink, &config, "cats", Direction::Up);
        sink.fail = true;
        ballot.cast(&mut sink, &config, "cats", Direction::Down);
        assert_eq!(ballot.marked(), None);
    }

    #[test]
    fn test_failed_retraction_stays_unmarked() {
        let config = Config::default();
        let mut sink = Recorder::default();
        let mut ballot = Ballot::new("https://example.com");
        ballot.cast(&mut sink, &config, "cats", Direction::Up);
        assert_eq!(ballot.marked(), Some(Direction::Up));

        sink.fail = true;
        ballot.cast(&mut sink, &config, "cats", Direction::Up);
        assert_eq!(sink.sent[1].v, -1);
        assert_eq!(ballot.marked(), None);
    }

    #[test]
    fn test_posts_to_configured_endpoint() {
        let config = Config::from_json(r#"{"vote_endpoint": "/api/vote"}"#).unwrap();
        let mut sink = Recorder::default();
        let mut ballot = Ballot::new("https://example.com");
        ballot.cast(&mut sink, &config, "cats", Direction::Down);
        assert_eq!(sink.endpoints, ["/api/vote"]);
        assert_eq!(Config::default().vote_endpoint, "/vote");
    }

    #[test]
    fn test_to_form() {
        let request = VoteRequest {
            q: "big cats".into(),
            u: "https://example.com/a?b=c".into(),
            v: -1,
        };
        assert_eq!(
            request.to_form(),
            "q=big+cats&u=https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc&v=-1"
        );
    }
}
