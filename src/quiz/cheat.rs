/// What the cheat screen is opened with: the true answer to the displayed question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheatRequest {
    pub answer_is_true: bool,
}

/// What the cheat screen reports back when it closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheatResponse {
    pub answer_shown: bool,
}

impl CheatResponse {
    /// An abandoned exchange produces no response, which counts as "not shown".
    pub fn was_shown(response: Option<CheatResponse>) -> bool {
        response.map_or(false, |r| r.answer_shown)
    }
}

/// One round trip between the quiz screen and the cheat screen.
///
/// Lives in the dialogue state while the cheat screen is open, so it has to
/// survive being stored and reloaded between messages.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheatExchange {
    request: CheatRequest,
    answer_shown: bool,
}

impl CheatExchange {
    pub fn open(request: CheatRequest) -> Self {
        Self {
            request,
            answer_shown: false,
        }
    }

    /// The user asked to see the answer. Returns the answer to render.
    pub fn reveal(&mut self) -> bool {
        self.answer_shown = true;
        self.request.answer_is_true
    }

    pub fn answer_shown(&self) -> bool {
        self.answer_shown
    }

    pub fn finish(self) -> CheatResponse {
        CheatResponse {
            answer_shown: self.answer_shown,
        }
    }
}
