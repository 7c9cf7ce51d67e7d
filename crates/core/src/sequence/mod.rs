// Copyright (c) stratadb.com 2026
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{
	fmt::{self, Debug, Formatter},
	sync::Arc,
};

use crate::value::Value;

/// A pull-based, possibly-infinite, ordered sequence of rows.
///
/// At most one consumer may pull from a sequence instance unless the
/// concrete type documents otherwise. Resources acquired on first pull are
/// released when the sequence is dropped, whether iteration completed or
/// was abandoned.
pub trait RowSequence {
	fn next(&mut self) -> Option<Value>;
}

pub type BoxedRowSequence = Box<dyn RowSequence + Send>;

/// Adapts any iterator of values into a row sequence.
pub struct IterSequence<I>(I);

impl<I> IterSequence<I> {
	pub fn new(iter: I) -> Self {
		Self(iter)
	}
}

impl<I> RowSequence for IterSequence<I>
where
	I: Iterator<Item = Value>,
{
	fn next(&mut self) -> Option<Value> {
		self.0.next()
	}
}

/// Bounded prefix of another sequence.
pub struct TakeSequence {
	inner: BoxedRowSequence,
	remaining: usize,
}

impl TakeSequence {
	pub fn new(inner: BoxedRowSequence, count: usize) -> Self {
		Self {
			inner,
			remaining: count,
		}
	}
}

impl RowSequence for TakeSequence {
	fn next(&mut self) -> Option<Value> {
		if self.remaining == 0 {
			return None;
		}
		self.remaining -= 1;
		self.inner.next()
	}
}

/// A re-invokable factory of row sequences. Each `open` yields a fresh
/// single-pass sequence over the same rows.
#[derive(Clone)]
pub struct RowSource(Arc<dyn Fn() -> BoxedRowSequence + Send + Sync>);

impl RowSource {
	pub fn new(open: impl Fn() -> BoxedRowSequence + Send + Sync + 'static) -> Self {
		Self(Arc::new(open))
	}

	/// A source backed by an in-memory row list.
	pub fn from_values(values: Vec<Value>) -> Self {
		Self::new(move || Box::new(IterSequence::new(values.clone().into_iter())))
	}

	pub fn open(&self) -> BoxedRowSequence {
		(self.0)()
	}
}

impl Debug for RowSource {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("RowSource")
	}
}

/// A composable query handle, richer than the plain sequence view.
///
/// Combinators stacked here (currently a bounded prefix take) are carried
/// as query state, not applied to rows. `sequence_view` narrows to the
/// plain lazy-sequence view, applying pending combinators directly, which
/// is the only interpretation the outer compiler understands.
#[derive(Clone, Debug)]
pub struct ComposableQuery {
	source: RowSource,
	take: Option<usize>,
}

impl ComposableQuery {
	pub fn new(source: RowSource) -> Self {
		Self {
			source,
			take: None,
		}
	}

	/// Bounded prefix take, composed with any earlier bound.
	pub fn take(mut self, count: usize) -> Self {
		self.take = Some(self.take.map_or(count, |existing| existing.min(count)));
		self
	}

	/// Narrows to the plain sequence view.
	pub fn sequence_view(&self) -> BoxedRowSequence {
		let inner = self.source.open();
		match self.take {
			Some(count) => Box::new(TakeSequence::new(inner, count)),
			None => inner,
		}
	}
}
