//! Emphasis state machine.
//!
//! The processor tracks exactly one strong span and one emphasis span. There
//! is no stack: a second opener of the same kind cannot start while the first
//! is open, and spans that cross each other fall back to literal text.
//!
//! Text between delimiters accumulates in a buffer. Open spans remember the
//! buffer offset where their content starts; closing a span cuts its content
//! off the buffer, flushes whatever precedes it as a `Text` node and emits the
//! span node. Spans still open at the end get their markers put back at
//! their start offsets.
//!
//! A strong span whose prefix was already emitted (because an emphasis closed
//! inside it) and which then fails is turned back into text at node level:
//! its `Strong` pieces become `Text` and the `__` goes in front of them.
//!
//! Strong text containing emphasis is emitted flat, as
//! `Strong(prefix) Emphasis(inner) Strong(suffix)`.

use crate::assemble::{commit_text, insert_from_end, merge_text_nodes};
use crate::delimiter::{
    can_open_or_close, crosses_words, is_word_char, next_char, prev_char, Flank, Marker,
};
use crate::escape::ScanChar;
use undermark_core::Node;

/// State of one span slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SpanState {
    open: bool,
    /// Buffer offset where the span's content begins
    start: usize,
    /// A word character immediately precedes the opening delimiter
    opened_inside_word: bool,
    /// Whitespace was buffered since the span opened
    saw_whitespace: bool,
    /// Index of the first node emitted for this span while still open
    flushed_at: Option<usize>,
}

impl SpanState {
    fn open_at(&mut self, start: usize, opened_inside_word: bool) {
        *self = Self {
            open: true,
            start,
            opened_inside_word,
            saw_whitespace: false,
            flushed_at: None,
        };
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Per-block emphasis resolver.
#[derive(Debug)]
pub struct MarkerProcessor<'a> {
    input: &'a [ScanChar],
    buffer: String,
    nodes: Vec<Node>,
    strong: SpanState,
    emphasis: SpanState,
}

impl<'a> MarkerProcessor<'a> {
    pub fn new(input: &'a [ScanChar]) -> Self {
        Self {
            input,
            buffer: String::with_capacity(input.len()),
            nodes: Vec::new(),
            strong: SpanState::default(),
            emphasis: SpanState::default(),
        }
    }

    /// Buffer a non-delimiter character.
    pub fn push_char(&mut self, ch: char) {
        if ch.is_whitespace() {
            if self.strong.open {
                self.strong.saw_whitespace = true;
            }
            if self.emphasis.open {
                self.emphasis.saw_whitespace = true;
            }
        }
        self.buffer.push(ch);
    }

    /// Resolve the delimiter token at `pos` and return how many characters it used.
    pub fn handle(&mut self, marker: Marker, pos: usize) -> usize {
        match marker {
            Marker::Strong => self.handle_strong(pos),
            Marker::Emphasis => self.handle_emphasis(pos),
        }
        marker.char_len()
    }

    /// Abort whatever is still open and return the finished node sequence.
    pub fn finish(mut self) -> Vec<Node> {
        self.abort_open_spans();
        commit_text(&mut self.buffer, &mut self.nodes);
        merge_text_nodes(self.nodes)
    }

    fn handle_strong(&mut self, pos: usize) {
        if self.emphasis.open {
            // Strong opened first and wants to end inside the emphasis: the
            // spans cross, so neither counts.
            if self.strong.open && self.strong.start < self.emphasis.start {
                self.abort_open_spans();
            }
            // Strong markers are inert while emphasis is open
            self.push_literal(Marker::Strong);
            return;
        }

        if self.should_close(self.strong, pos, Marker::Strong) {
            self.close_strong();
        } else if !self.strong.open && self.can_open(pos, Marker::Strong) {
            let inside_word = self.opens_inside_word(pos);
            self.strong.open_at(self.buffer.len(), inside_word);
        } else {
            self.push_literal(Marker::Strong);
        }
    }

    fn handle_emphasis(&mut self, pos: usize) {
        let len = Marker::Emphasis.char_len();

        if self.emphasis.open {
            let closable = can_open_or_close(self.input, pos, len, Flank::Close);
            let closing_inside_word = is_word_char(next_char(self.input, pos, len));

            if closable
                && crosses_words(
                    self.emphasis.opened_inside_word,
                    closing_inside_word,
                    self.emphasis.saw_whitespace,
                )
            {
                // `ра_зных сл_овах`: the opener goes back to being text and
                // this underscore stays literal too.
                self.buffer
                    .insert_str(self.emphasis.start, Marker::Emphasis.as_str());
                self.emphasis.reset();
                self.push_literal(Marker::Emphasis);
                return;
            }

            if closable && self.buffer.len() > self.emphasis.start {
                self.close_emphasis();
                return;
            }
        } else if self.can_open(pos, Marker::Emphasis) {
            let inside_word = self.opens_inside_word(pos);
            self.emphasis.open_at(self.buffer.len(), inside_word);
            return;
        }

        self.push_literal(Marker::Emphasis);
    }

    fn can_open(&self, pos: usize, marker: Marker) -> bool {
        can_open_or_close(self.input, pos, marker.char_len(), Flank::Open)
    }

    fn should_close(&self, span: SpanState, pos: usize, marker: Marker) -> bool {
        let len = marker.char_len();
        span.open
            && can_open_or_close(self.input, pos, len, Flank::Close)
            && !crosses_words(
                span.opened_inside_word,
                is_word_char(next_char(self.input, pos, len)),
                span.saw_whitespace,
            )
            && self.buffer.len() > span.start
    }

    fn opens_inside_word(&self, pos: usize) -> bool {
        is_word_char(prev_char(self.input, pos))
    }

    fn push_literal(&mut self, marker: Marker) {
        self.buffer.push_str(marker.as_str());
    }

    fn close_strong(&mut self) {
        let content = self.buffer.split_off(self.strong.start);
        commit_text(&mut self.buffer, &mut self.nodes);
        self.nodes.push(Node::Strong(content));
        self.strong.reset();
    }

    fn close_emphasis(&mut self) {
        let content = self.buffer.split_off(self.emphasis.start);

        if self.strong.open && self.strong.start < self.emphasis.start {
            let prefix = self.buffer.split_off(self.strong.start);
            commit_text(&mut self.buffer, &mut self.nodes);
            if self.strong.flushed_at.is_none() {
                self.strong.flushed_at = Some(self.nodes.len());
            }
            self.nodes.push(Node::Strong(prefix));
        } else {
            // `___a_`: both opened on the same offset, so the strong span
            // would have to close inside the emphasis. Its marker stays in
            // front of the emphasis as text.
            if self.strong.open {
                self.abort_strong();
            }
            commit_text(&mut self.buffer, &mut self.nodes);
        }

        // The flush emptied the buffer; an open strong continues from here.
        if self.strong.open {
            self.strong.start = self.buffer.len();
        }

        self.nodes.push(Node::Emphasis(content));
        self.emphasis.reset();
    }

    /// Put the markers of every open span back as text.
    fn abort_open_spans(&mut self) {
        let mut inserts = Vec::with_capacity(2);
        if self.strong.open {
            match self.strong.flushed_at {
                Some(first) => self.demote_strong_nodes(first),
                None => inserts.push((self.strong.start, Marker::Strong.as_str())),
            }
        }
        if self.emphasis.open {
            inserts.push((self.emphasis.start, Marker::Emphasis.as_str()));
        }
        insert_from_end(&mut self.buffer, &mut inserts);

        self.strong.reset();
        self.emphasis.reset();
    }

    /// Abort the strong span alone, emphasis left untouched.
    fn abort_strong(&mut self) {
        match self.strong.flushed_at {
            Some(first) => self.demote_strong_nodes(first),
            None => self
                .buffer
                .insert_str(self.strong.start, Marker::Strong.as_str()),
        }
        self.strong.reset();
    }

    /// Turn the `Strong` nodes emitted from `first` on back into text, led by `__`.
    fn demote_strong_nodes(&mut self, first: usize) {
        for node in &mut self.nodes[first..] {
            if let Node::Strong(text) = node {
                let text = std::mem::take(text);
                *node = Node::Text(text);
            }
        }
        self.nodes
            .insert(first, Node::Text(Marker::Strong.as_str().to_string()));
    }
}
