/// An elementary edit between vertices addressed by their postorder indices.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub(crate) enum Step {
    Remove(usize),
    Insert(usize),
    Update(usize, usize),
    Match(usize, usize),
}

/// Identifies an edit script stored in a [Scripts] arena.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub(crate) struct ScriptId(usize);

impl ScriptId {
    /// The script that performs no edits.
    pub(crate) const EMPTY: Self = ScriptId(0);
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Link {
    Empty,
    Push { prev: ScriptId, step: Step },
    Join { prev: ScriptId, tail: ScriptId },
}

/// An arena of edit scripts that share their prefixes.
///
/// Every script is either empty, another script followed by a single [Step], or two scripts one
/// after the other. Links only ever point to earlier links, so everything below a [checkpoint]
/// stays put when the scripts pushed after it are [compacted].
///
/// [checkpoint]: Scripts::checkpoint
/// [compacted]: Scripts::compact
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Scripts {
    links: Vec<Link>,
}

impl Default for Scripts {
    fn default() -> Self {
        Scripts {
            links: vec![Link::Empty],
        }
    }
}

impl Scripts {
    /// Appends `step` to `prev`.
    pub(crate) fn push(&mut self, prev: ScriptId, step: Step) -> ScriptId {
        self.links.push(Link::Push { prev, step });
        ScriptId(self.links.len() - 1)
    }

    /// Appends `tail` to `prev`.
    pub(crate) fn join(&mut self, prev: ScriptId, tail: ScriptId) -> ScriptId {
        if tail == ScriptId::EMPTY {
            prev
        } else if prev == ScriptId::EMPTY {
            tail
        } else {
            self.links.push(Link::Join { prev, tail });
            ScriptId(self.links.len() - 1)
        }
    }

    /// The number of links in the arena.
    pub(crate) fn len(&self) -> usize {
        self.links.len()
    }

    /// Marks the scripts pushed so far as permanent.
    pub(crate) fn checkpoint(&self) -> usize {
        self.links.len()
    }

    /// Drops every link created since `mark` that none of the `roots` reaches, relocating the
    /// surviving links and rewriting `roots` in place.
    pub(crate) fn compact(&mut self, mark: usize, roots: &mut [ScriptId]) {
        let mut live = vec![false; self.links.len() - mark];
        let mut stack: Vec<_> = roots.iter().map(|&ScriptId(id)| id).collect();

        while let Some(id) = stack.pop() {
            if id < mark || std::mem::replace(&mut live[id - mark], true) {
                continue;
            }

            match self.links[id] {
                Link::Empty => {}
                Link::Push { prev, .. } => stack.push(prev.0),
                Link::Join { prev, tail } => stack.extend([prev.0, tail.0]),
            }
        }

        let relocated = |ScriptId(id): ScriptId, to: &[usize]| {
            ScriptId(if id < mark { id } else { to[id - mark] })
        };

        let mut to = vec![usize::MAX; live.len()];
        let mut next = mark;
        for id in mark..self.links.len() {
            if !live[id - mark] {
                continue;
            }

            self.links[next] = match self.links[id] {
                Link::Empty => Link::Empty,
                Link::Push { prev, step } => Link::Push {
                    prev: relocated(prev, &to),
                    step,
                },
                Link::Join { prev, tail } => Link::Join {
                    prev: relocated(prev, &to),
                    tail: relocated(tail, &to),
                },
            };

            to[id - mark] = next;
            next += 1;
        }

        self.links.truncate(next);
        for root in roots {
            *root = relocated(*root, &to);
        }
    }

    /// Returns the steps of `script` in order.
    pub(crate) fn unroll(&self, script: ScriptId) -> Vec<Step> {
        enum Frame {
            Visit(ScriptId),
            Emit(Step),
        }

        let mut steps = Vec::new();
        let mut stack = vec![Frame::Visit(script)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Emit(step) => steps.push(step),
                Frame::Visit(ScriptId(id)) => match self.links[id] {
                    Link::Empty => {}
                    Link::Push { prev, step } => {
                        stack.push(Frame::Emit(step));
                        stack.push(Frame::Visit(prev));
                    }
                    Link::Join { prev, tail } => {
                        stack.push(Frame::Visit(tail));
                        stack.push(Frame::Visit(prev));
                    }
                },
            }
        }

        steps
    }
}
