//! Two-way lenses between a transport value `S` (a body, a message) and a
//! typed value `T`.
//!
//! A [`BiDiLensSpec`] is a recipe: start from a base spec over raw text and
//! [`map`](BiDiLensSpec::map) it into richer types, then call
//! [`to_lens`](BiDiLensSpec::to_lens) to get the [`BiDiLens`] that does the
//! work.

use std::fmt;
use std::sync::Arc;

use json_format_core::Result;
use tracing::debug;

use crate::content::{ContentNegotiation, ContentType};

type Get<S, T> = Arc<dyn Fn(&S) -> Result<T> + Send + Sync>;
type Set<S, T> = Arc<dyn Fn(&T) -> S + Send + Sync>;

/// What a lens tells its transport about the payload it handles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LensMeta {
    pub content_type: Option<ContentType>,
    pub description: Option<String>,
    pub negotiation: ContentNegotiation,
}

impl LensMeta {
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type: Some(content_type),
            ..Self::default()
        }
    }
}

pub struct BiDiLensSpec<S, T> {
    meta: LensMeta,
    get: Get<S, T>,
    set: Set<S, T>,
}

impl<S, T> Clone for BiDiLensSpec<S, T> {
    fn clone(&self) -> Self {
        Self {
            meta: self.meta.clone(),
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<S, T> fmt::Debug for BiDiLensSpec<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiDiLensSpec").field("meta", &self.meta).finish_non_exhaustive()
    }
}

impl<S: 'static, T: 'static> BiDiLensSpec<S, T> {
    pub fn new(
        meta: LensMeta,
        get: impl Fn(&S) -> Result<T> + Send + Sync + 'static,
        set: impl Fn(&T) -> S + Send + Sync + 'static,
    ) -> Self {
        Self {
            meta,
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    pub fn meta(&self) -> &LensMeta {
        &self.meta
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.meta.description = Some(description.into());
        self
    }

    pub fn with_negotiation(mut self, negotiation: ContentNegotiation) -> Self {
        self.meta.negotiation = negotiation;
        self
    }

    /// Spec over `U`, reading through `decode` after this spec's read and
    /// writing through `encode` before this spec's write.
    pub fn map<U: 'static>(
        self,
        decode: impl Fn(T) -> Result<U> + Send + Sync + 'static,
        encode: impl Fn(&U) -> T + Send + Sync + 'static,
    ) -> BiDiLensSpec<S, U> {
        let get = self.get;
        let set = self.set;
        BiDiLensSpec {
            meta: self.meta,
            get: Arc::new(move |source: &S| get(source).and_then(&decode)),
            set: Arc::new(move |value: &U| set(&encode(value))),
        }
    }

    pub fn to_lens(self) -> BiDiLens<S, T> {
        BiDiLens { spec: self }
    }
}

/// A finished lens: [`extract`](Self::extract) reads a `T` out of a transport
/// value and [`inject`](Self::inject) writes one into a new transport value.
pub struct BiDiLens<S, T> {
    spec: BiDiLensSpec<S, T>,
}

impl<S, T> Clone for BiDiLens<S, T> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec.clone(),
        }
    }
}

impl<S, T> fmt::Debug for BiDiLens<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BiDiLens").field("meta", &self.spec.meta).finish_non_exhaustive()
    }
}

impl<S, T> BiDiLens<S, T> {
    pub fn meta(&self) -> &LensMeta {
        &self.spec.meta
    }

    pub fn extract(&self, source: &S) -> Result<T> {
        (self.spec.get)(source).inspect_err(|err| {
            debug!(
                description = self.spec.meta.description.as_deref().unwrap_or("-"),
                error = %err,
                "lens extraction failed"
            );
        })
    }

    pub fn inject(&self, value: &T) -> S {
        (self.spec.set)(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_format_core::FormatError;

    fn text_spec() -> BiDiLensSpec<String, String> {
        BiDiLensSpec::new(
            LensMeta::new(ContentType::TEXT_PLAIN),
            |s: &String| Ok(s.clone()),
            |s: &String| s.clone(),
        )
    }

    #[test]
    fn map_composes_both_directions() {
        let lens = text_spec()
            .map(
                |s| s.parse::<i32>().map_err(|e| FormatError::MalformedJson(e.to_string())),
                |n: &i32| n.to_string(),
            )
            .map(|n| Ok(n * 2), |n: &i32| n / 2)
            .to_lens();
        assert_eq!(lens.extract(&"21".to_string()), Ok(42));
        assert_eq!(lens.inject(&42), "21");
        assert!(lens.extract(&"x".to_string()).is_err());
    }

    #[test]
    fn meta_survives_mapping() {
        let spec = text_spec()
            .with_description("greeting")
            .with_negotiation(ContentNegotiation::Strict)
            .map(Ok, |s: &String| s.clone());
        assert_eq!(spec.meta().description.as_deref(), Some("greeting"));
        assert_eq!(spec.meta().negotiation, ContentNegotiation::Strict);
        assert_eq!(spec.meta().content_type, Some(ContentType::TEXT_PLAIN));
    }

    #[test]
    fn lenses_are_shareable() {
        fn assert_send_sync<X: Send + Sync + Clone>(_: &X) {}
        let lens = text_spec().to_lens();
        assert_send_sync(&lens);
    }
}
