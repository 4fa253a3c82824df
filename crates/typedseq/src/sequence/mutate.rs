use crate::{AllowList, Error, MAX_PRESIZE_LEN, Result, TypedSeq};

/// Gated writes.
///
/// Each call validates its whole batch before touching the sequence, so a
/// rejection returns [`Error::TypeNotAllowed`](crate::Error::TypeNotAllowed)
/// with the sequence unchanged.
impl<P: AllowList> TypedSeq<P> {
    /// Writes `value` at `index`.
    ///
    /// Writing past the end grows the sequence, filling the gap with
    /// placeholders. The sequence cannot grow beyond [`MAX_PRESIZE_LEN`]
    /// positions; a write past that returns [`Error::IndexTooHigh`].
    pub fn set(&mut self, index: usize, value: P::Item) -> Result<()> {
        P::is_allowed(&value)?;

        if index >= MAX_PRESIZE_LEN {
            return Err(Error::IndexTooHigh {
                index,
                max: MAX_PRESIZE_LEN - 1,
            });
        }

        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(value);
        Ok(())
    }

    /// Appends one value and returns the new length.
    pub fn push(&mut self, value: P::Item) -> Result<usize> {
        P::is_allowed(&value)?;
        self.slots.push(Some(value));
        Ok(self.slots.len())
    }

    /// Appends `values` in order and returns the new length.
    pub fn append<I>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = P::Item>,
    {
        let batch = Self::validated(values)?;
        self.slots.extend(batch);
        Ok(self.slots.len())
    }

    /// Inserts `values` at the front, keeping their relative order, and
    /// returns the new length.
    pub fn prepend<I>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = P::Item>,
    {
        let batch = Self::validated(values)?;
        self.slots.splice(0..0, batch);
        Ok(self.slots.len())
    }

    /// Removes `delete_count` elements starting at `start` and inserts
    /// `insertions` in their place.
    ///
    /// `start` is clamped to the length, `delete_count` to the number of
    /// positions after `start`. Returns the removed positions as a sequence
    /// of the same kind, placeholders included.
    pub fn replace_range<I>(
        &mut self,
        start: usize,
        delete_count: usize,
        insertions: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = P::Item>,
    {
        let batch = Self::validated(insertions)?;

        let start = start.min(self.slots.len());
        let end = start + delete_count.min(self.slots.len() - start);
        let removed = self.slots.splice(start..end, batch).collect();

        Ok(Self::from_slots(removed))
    }

    /// Returns a new sequence holding this one followed by every element of
    /// `others`, flattened one level.
    ///
    /// Only the operands' elements are validated. Neither the receiver nor
    /// the operands are modified.
    ///
    /// ```
    /// use typedseq::{Kind, TypedSeq, Value, allow_list};
    ///
    /// allow_list!(Strings: Value => [Kind::String]);
    ///
    /// let seq = TypedSeq::<Strings>::of([Value::from("a")]).unwrap();
    /// let merged = seq.merge([vec![Value::from("b")], vec![Value::from("c")]]).unwrap();
    /// assert_eq!(merged, [Value::from("a"), Value::from("b"), Value::from("c")]);
    ///
    /// assert!(seq.merge([[Value::from(1)]]).is_err());
    /// ```
    pub fn merge<I>(&self, others: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = P::Item>,
    {
        let tail = Self::validated(others.into_iter().flatten())?;

        let mut slots = Vec::with_capacity(self.slots.len() + tail.len());
        slots.extend(self.slots.iter().cloned());
        slots.extend(tail);

        Ok(Self::from_slots(slots))
    }

    /// Removes the last position, returning its element if populated.
    pub fn pop(&mut self) -> Option<P::Item> {
        self.slots.pop().flatten()
    }

    /// Removes the first position, returning its element if populated.
    pub fn shift(&mut self) -> Option<P::Item> {
        if self.slots.is_empty() {
            return None;
        }
        self.slots.remove(0)
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn reverse(&mut self) {
        self.slots.reverse();
    }
}
