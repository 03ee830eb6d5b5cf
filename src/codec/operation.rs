//! Field mutation operators tagged with `__op`.
//!
//! An operation is sent in place of a field's value in an update body:
//!
//! ```text
//! {"score": {"__op": "Increment", "amount": 1}}
//! ```
//!
//! Operations are encode-only; the server never returns them.

use serde::{Serialize, Serializer};
use serde_json::{json, Number, Value};

use super::special::Pointer;
use crate::protocol::{key, op};

/// A field-level mutation instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOperation {
    /// Add `amount` to a numeric field. Negative amounts decrement.
    Increment {
        /// Exact amount to add.
        amount: Number,
    },
    /// Remove the field from the object.
    Delete,
    /// Append values to an array field.
    Add(Vec<Value>),
    /// Append values not already present in an array field.
    AddUnique(Vec<Value>),
    /// Remove every occurrence of the values from an array field.
    Remove(Vec<Value>),
    /// Add objects to a relation field.
    AddRelation(Vec<Pointer>),
    /// Remove objects from a relation field.
    RemoveRelation(Vec<Pointer>),
}

impl FieldOperation {
    /// Increment by an integer or other exact number.
    ///
    /// # Example
    ///
    /// ```
    /// use bmob_protocol::codec::FieldOperation;
    /// use serde_json::json;
    ///
    /// let encoded = FieldOperation::increment(5).encode();
    /// assert_eq!(encoded, json!({"__op": "Increment", "amount": 5}));
    /// ```
    pub fn increment(amount: impl Into<Number>) -> Self {
        Self::Increment {
            amount: amount.into(),
        }
    }

    /// Increment by `-amount`.
    ///
    /// `i64::MIN` negates to 2^63, which is sent as an unsigned amount.
    pub fn decrement(amount: i64) -> Self {
        match amount.checked_neg() {
            Some(negated) => Self::increment(negated),
            None => Self::increment(amount.unsigned_abs()),
        }
    }

    /// Increment by a float. `None` if `amount` is NaN or infinite.
    pub fn increment_by(amount: f64) -> Option<Self> {
        Number::from_f64(amount).map(|amount| Self::Increment { amount })
    }

    /// `Add` from anything convertible to JSON values.
    pub fn add<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::Add(values.into_iter().map(Into::into).collect())
    }

    /// `AddUnique` from anything convertible to JSON values.
    pub fn add_unique<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::AddUnique(values.into_iter().map(Into::into).collect())
    }

    /// `Remove` from anything convertible to JSON values.
    pub fn remove<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::Remove(values.into_iter().map(Into::into).collect())
    }

    /// The `__op` literal for this operation.
    pub fn op_tag(&self) -> &'static str {
        match self {
            Self::Increment { .. } => op::INCREMENT,
            Self::Delete => op::DELETE,
            Self::Add(_) => op::ADD,
            Self::AddUnique(_) => op::ADD_UNIQUE,
            Self::Remove(_) => op::REMOVE,
            Self::AddRelation(_) => op::ADD_RELATION,
            Self::RemoveRelation(_) => op::REMOVE_RELATION,
        }
    }

    /// Encode to the tagged JSON form.
    pub fn encode(&self) -> Value {
        let tag = self.op_tag();
        match self {
            Self::Increment { amount } => json!({ key::OP: tag, key::AMOUNT: amount }),
            Self::Delete => json!({ key::OP: tag }),
            Self::Add(values) | Self::AddUnique(values) | Self::Remove(values) => {
                json!({ key::OP: tag, key::OBJECTS: values })
            }
            Self::AddRelation(pointers) | Self::RemoveRelation(pointers) => {
                let objects: Vec<Value> = pointers.iter().map(Pointer::encode).collect();
                json!({ key::OP: tag, key::OBJECTS: objects })
            }
        }
    }
}

impl From<FieldOperation> for Value {
    fn from(operation: FieldOperation) -> Self {
        operation.encode()
    }
}

impl Serialize for FieldOperation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}
