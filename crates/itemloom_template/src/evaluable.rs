//! The typed, lazily-evaluated property.
//!
//! An [`Evaluable`] wraps a raw payload (literal or expression) and resolves
//! it on demand against an [`EvalContext`]. Resolution is pure and
//! repeatable: the same payload and context always yield the same result,
//! and nothing is cached here (only constant-name lookups are memoized, in
//! the shared [`ConstantCache`](itemloom_foundation::ConstantCache)).
//!
//! Typed reads follow the soft-fail taxonomy: user-data problems (unknown
//! constant names, malformed color triples) resolve to `None` or an empty
//! collection, while genuine evaluator faults propagate as [`Error`]s.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use itemloom_foundation::{
    Error, EvalContext, ExpressionEvaluator, ImSet, NamedConstant, RawValue, Result, Value,
    translate_color_codes,
};
use itemloom_item::{
    DyeColor, EffectKind, Enchant, ItemFlag, ItemKind, PatternShape, PotionKind, Rgb,
};

/// A property that may be a literal or a deferred expression, resolved
/// against a context at read time.
///
/// Evaluables are immutable after construction and cheap to clone (the
/// payload and evaluator handle are `Arc`-backed), so builder copies share
/// them by reference.
#[derive(Clone)]
pub struct Evaluable {
    raw: RawValue,
    evaluator: Option<Arc<dyn ExpressionEvaluator>>,
}

impl Evaluable {
    /// Creates an evaluable from a literal value.
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self {
            raw: RawValue::Literal(value.into()),
            evaluator: None,
        }
    }

    /// Creates an evaluable from expression text and the engine that will
    /// resolve it.
    #[must_use]
    pub fn expression(text: impl Into<Arc<str>>, evaluator: Arc<dyn ExpressionEvaluator>) -> Self {
        Self {
            raw: RawValue::Expression(text.into()),
            evaluator: Some(evaluator),
        }
    }

    /// Resolves the raw payload to a value.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults; also faults when an expression payload
    /// has no evaluator attached.
    fn resolve(&self, context: &EvalContext) -> Result<Value> {
        match &self.raw {
            RawValue::Literal(value) => Ok(value.clone()),
            RawValue::Expression(text) => {
                let attach = |mut error: Error| {
                    let context = error.context.take().unwrap_or_default();
                    error.with_context(context.with_expression(&**text))
                };
                match &self.evaluator {
                    Some(evaluator) => evaluator.evaluate(text, context).map_err(attach),
                    None => Err(attach(Error::evaluation("no evaluator attached"))),
                }
            }
        }
    }

    /// Resolves to a display string with color codes translated.
    ///
    /// Nil resolves to `None`. Every other value is stringified and run
    /// through [`translate_color_codes`]; this is the one mandatory
    /// cross-cutting transform on string reads.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_string(&self, context: &EvalContext) -> Result<Option<String>> {
        let value = self.resolve(context)?;
        if value.is_nil() {
            return Ok(None);
        }
        Ok(Some(translate_color_codes(&value.stringified())))
    }

    /// Resolves to an integer using lossy scalar coercion.
    ///
    /// Nil resolves to `None`; everything else coerces (floats truncate,
    /// parseable strings parse, unparseable text coerces to 0).
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_int(&self, context: &EvalContext) -> Result<Option<i64>> {
        let value = self.resolve(context)?;
        if value.is_nil() {
            return Ok(None);
        }
        Ok(Some(value.coerced_int()))
    }

    /// Resolves to a boolean.
    ///
    /// Accepts `Bool` values and the strings `true`/`false` (case
    /// insensitive, trimmed); anything else resolves to `None`.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_bool(&self, context: &EvalContext) -> Result<Option<bool>> {
        let value = self.resolve(context)?;
        if let Some(b) = value.as_bool() {
            return Ok(Some(b));
        }
        Ok(value.as_str().and_then(|s| {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                Some(true)
            } else if s.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }))
    }

    /// Resolves to an ordered list of display strings.
    ///
    /// A list yields one string per element, a scalar yields a single-element
    /// list, and nil yields an empty list. Each line gets color codes
    /// translated.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_string_list(&self, context: &EvalContext) -> Result<Vec<String>> {
        let value = self.resolve(context)?;
        Ok(match &value {
            Value::Nil => Vec::new(),
            Value::List(items) => items
                .iter()
                .map(|item| translate_color_codes(&item.stringified()))
                .collect(),
            scalar => vec![translate_color_codes(&scalar.stringified())],
        })
    }

    /// Resolves to an unordered set of display strings.
    ///
    /// Same shape rules as [`Evaluable::as_string_list`], with duplicate
    /// lines collapsed.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_string_set(&self, context: &EvalContext) -> Result<ImSet<String>> {
        Ok(self.as_string_list(context)?.into_iter().collect())
    }

    /// Resolves to a named constant through the context's cache.
    ///
    /// Unknown names resolve to `None`, never an error; the negative result
    /// is memoized so repeated misses do not re-scan the constant table.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_constant<T: NamedConstant>(&self, context: &EvalContext) -> Result<Option<T>> {
        let value = self.resolve(context)?;
        if value.is_nil() {
            return Ok(None);
        }
        let name = value.stringified();
        let resolved = context.constants().resolve::<T>(&name);
        if resolved.is_none() {
            debug!(name = %name, "unresolvable constant name, skipping");
        }
        Ok(resolved)
    }

    /// Resolves to a set of named constants.
    ///
    /// A list resolves element-wise, a scalar resolves as a singleton, nil
    /// resolves to the empty set. Unresolvable names are skipped.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_constant_set<T>(&self, context: &EvalContext) -> Result<ImSet<T>>
    where
        T: NamedConstant + Eq + std::hash::Hash,
    {
        let value = self.resolve(context)?;
        let names: Vec<String> = match &value {
            Value::Nil => Vec::new(),
            Value::List(items) => items.iter().map(Value::stringified).collect(),
            scalar => vec![scalar.stringified()],
        };

        let mut set = ImSet::new();
        for name in names {
            if let Some(constant) = context.constants().resolve::<T>(&name) {
                set = set.insert(constant);
            } else {
                debug!(name = %name, "unresolvable constant name in set, skipping");
            }
        }
        Ok(set)
    }

    /// Resolves to an item kind.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_item_kind(&self, context: &EvalContext) -> Result<Option<ItemKind>> {
        self.as_constant(context)
    }

    /// Resolves to an enchantment.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_enchantment(&self, context: &EvalContext) -> Result<Option<Enchant>> {
        self.as_constant(context)
    }

    /// Resolves to an effect kind.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_effect_kind(&self, context: &EvalContext) -> Result<Option<EffectKind>> {
        self.as_constant(context)
    }

    /// Resolves to a base potion kind.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_potion_kind(&self, context: &EvalContext) -> Result<Option<PotionKind>> {
        self.as_constant(context)
    }

    /// Resolves to a dye color.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_dye_color(&self, context: &EvalContext) -> Result<Option<DyeColor>> {
        self.as_constant(context)
    }

    /// Resolves to a banner pattern shape.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_pattern_shape(&self, context: &EvalContext) -> Result<Option<PatternShape>> {
        self.as_constant(context)
    }

    /// Resolves to a set of item flags.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_flag_set(&self, context: &EvalContext) -> Result<ImSet<ItemFlag>> {
        self.as_constant_set(context)
    }

    /// Resolves to an RGB color.
    ///
    /// Accepts a named dye color or a whitespace-separated decimal triple
    /// `"R G B"` with components in 0..=255. Malformed triples and unknown
    /// names resolve to `None`, never an error.
    ///
    /// # Errors
    ///
    /// Propagates evaluator faults.
    pub fn as_rgb(&self, context: &EvalContext) -> Result<Option<Rgb>> {
        let value = self.resolve(context)?;
        if value.is_nil() {
            return Ok(None);
        }
        let text = value.stringified();

        if let Some(dye) = context.constants().resolve::<DyeColor>(&text) {
            return Ok(Some(dye.rgb()));
        }

        let parsed = parse_rgb_triple(&text);
        if parsed.is_none() {
            debug!(text = %text, "unparseable color, skipping");
        }
        Ok(parsed)
    }
}

impl fmt::Debug for Evaluable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluable")
            .field("raw", &self.raw)
            .field("evaluator", &self.evaluator.is_some())
            .finish()
    }
}

/// Parses a `"R G B"` decimal triple. Any component outside 0..=255, any
/// non-integer token, or a token count other than three fails the parse.
fn parse_rgb_triple(text: &str) -> Option<Rgb> {
    let mut components = text.split_whitespace().map(str::parse::<u8>);
    let r = components.next()?.ok()?;
    let g = components.next()?.ok()?;
    let b = components.next()?.ok()?;
    if components.next().is_some() {
        return None;
    }
    Some(Rgb::new(r, g, b))
}
