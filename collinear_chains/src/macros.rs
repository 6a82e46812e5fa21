/// Macro used for test assertions on values implementing `fuzzy_eq`/`fuzzy_eq_eps` (reals and
/// points).
#[doc(hidden)]
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(left_val.fuzzy_eq(*right_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq(right)`
  left: `{:?}`,
 right: `{:?}`"#,
                        &*left_val, &*right_val
                    )
                }
            }
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        match (&$left, &$right, &$eps) {
            (left_val, right_val, eps_val) => {
                if !(left_val.fuzzy_eq_eps(*right_val, *eps_val)) {
                    panic!(
                        r#"assertion failed: `left.fuzzy_eq_eps(right, eps)`
  left: `{:?}`,
 right: `{:?}`
 eps: `{:?}`"#,
                        &*left_val, &*right_val, &*eps_val
                    )
                }
            }
        }
    }};
}

/// Macro used for implementing the `points` macro. Used for extracting macro repetition count for
/// reserving capacity up front.
#[doc(hidden)]
#[macro_export]
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

/// Construct a `Vec` of points from a list of (x, y) tuples.
///
/// # Examples
///
/// ```
/// # use collinear_chains::points;
/// # use collinear_chains::core::math::*;
/// let polyline = points![(0.0, 0.0), (5.0, 0.0), (5.0, 5.0)];
/// assert_eq!(polyline.len(), 3);
/// assert_eq!(polyline[1], Vector2::new(5.0, 0.0));
/// ```
#[macro_export]
macro_rules! points {
    ($( $x:expr ),* $(,)?) => {
        {
            let size = <[()]>::len(&[$($crate::replace_expr!(($x) ())),*]);
            let mut pts = Vec::with_capacity(size);
            $(
                pts.push($crate::core::math::Vector2::new($x.0, $x.1));
            )*
            pts
        }
    };
}
