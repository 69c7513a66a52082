use jspath_core::{
    BinaryOp, CancelToken, Expr, LimitError, Limits, Method, ParsedPath, RegexFlags, Subscript,
    UnaryOp,
};

use crate::{Bindings, DatetimeStatus, Error, JsonPath, VarType};

fn mutable(path: ParsedPath, bindings: &Bindings) -> bool {
    JsonPath::encode(&path).unwrap().is_mutable(bindings)
}

fn lax(expr: Expr, bindings: &Bindings) -> bool {
    mutable(ParsedPath::lax(expr), bindings)
}

fn strict(expr: Expr, bindings: &Bindings) -> bool {
    mutable(ParsedPath::strict(expr), bindings)
}

fn num(n: &str) -> Expr {
    Expr::numeric(n)
}

fn lt(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Less, left, right)
}

fn eq(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Equal, left, right)
}

fn datetime_of(key: &str, template: Option<&str>) -> Expr {
    Expr::root()
        .then(Expr::key(key))
        .then(Expr::datetime(template.map(Expr::string)))
}

fn vars(x: VarType, y: VarType) -> Bindings {
    Bindings::new().bind("x", x).bind("y", y)
}

#[test]
fn plain_filter_is_immutable() {
    let expr = Expr::root().then(Expr::filter(Expr::binary(
        BinaryOp::Greater,
        Expr::current(),
        num("3"),
    )));

    assert!(!lax(expr, &Bindings::new()));
}

#[test]
fn subscripts_without_comparisons_are_immutable() {
    let expr = Expr::root().then(Expr::index(vec![
        Subscript::range(num("1"), num("5")),
        Subscript::index(num("7")),
    ]));

    assert!(!lax(expr, &Bindings::new()));
}

#[test]
fn untemplated_datetime_against_zoned() {
    let expr = lt(datetime_of("a", None), datetime_of("b", Some("HH24:MI TZH")));

    assert!(lax(expr, &Bindings::new()));
}

#[test]
fn same_zone_class_is_immutable() {
    let non_zoned = lt(datetime_of("a", Some("HH24")), datetime_of("b", Some("HH24:MI")));
    let zoned = lt(
        datetime_of("a", Some("HH24 TZH")),
        datetime_of("b", Some("HH24:MI TZH:TZM")),
    );

    assert!(!lax(non_zoned, &Bindings::new()));
    assert!(!lax(zoned, &Bindings::new()));
}

#[test]
fn zoned_against_non_zoned() {
    let expr = lt(datetime_of("a", Some("HH24 TZH")), datetime_of("b", Some("HH24")));

    assert!(lax(expr, &Bindings::new()));
}

#[test]
fn both_untemplated() {
    let expr = eq(datetime_of("a", None), datetime_of("b", None));

    assert!(lax(expr, &Bindings::new()));
}

#[test]
fn variable_against_plain_value() {
    let expr = eq(Expr::root().then(Expr::key("a")), Expr::var("x"));
    let bindings = Bindings::new().bind("x", VarType::TimestampTz);

    assert!(!lax(expr, &bindings));
}

#[test]
fn variables_of_different_zone_classes() {
    let expr = || eq(Expr::var("x"), Expr::var("y"));

    assert!(lax(expr(), &vars(VarType::Date, VarType::TimestampTz)));
    assert!(lax(expr(), &vars(VarType::TimeTz, VarType::Time)));
    assert!(!lax(expr(), &vars(VarType::Timestamp, VarType::Timestamp)));
    assert!(!lax(expr(), &vars(VarType::Date, VarType::Time)));
    assert!(!lax(expr(), &vars(VarType::Other, VarType::TimestampTz)));
}

#[test]
fn unbound_variables_are_not_datetimes() {
    let expr = eq(Expr::var("x"), Expr::var("y"));

    assert!(!lax(expr, &Bindings::new()));
}

#[test]
fn variable_names_match_exactly() {
    let expr = eq(Expr::var("x"), Expr::var("y"));
    let bindings = Bindings::new()
        .bind("xx", VarType::Date)
        .bind("y", VarType::TimestampTz);

    assert!(!lax(expr, &bindings));
}

#[test]
fn method_after_datetime_resets_status() {
    let expr = lt(
        datetime_of("a", Some("HH24")).then(Expr::method(Method::Type)),
        Expr::var("x"),
    );

    assert!(!lax(expr, &Bindings::new().bind("x", VarType::TimestampTz)));
}

#[test]
fn non_string_template() {
    let expr = lt(
        Expr::root().then(Expr::datetime(Some(num("1")))),
        Expr::var("x"),
    );

    assert!(!lax(expr, &Bindings::new().bind("x", VarType::Date)));
}

#[test]
fn nested_comparison_is_found() {
    let expr = Expr::root().then(Expr::filter(Expr::binary(
        BinaryOp::And,
        Expr::binary(
            BinaryOp::Greater,
            Expr::current().then(Expr::key("a")),
            num("1"),
        ),
        lt(Expr::var("x"), Expr::var("y")),
    )));

    assert!(lax(expr, &vars(VarType::Date, VarType::TimeTz)));
}

#[test]
fn mutable_operand_makes_whole_path_mutable() {
    let expr = Expr::binary(
        BinaryOp::Or,
        lt(Expr::var("x"), Expr::var("y")),
        Expr::binary(BinaryOp::Equal, Expr::root(), num("1")),
    );

    assert!(lax(expr, &vars(VarType::Date, VarType::TimeTz)));
}

#[test]
fn current_item_takes_filter_subject_status() {
    let expr = Expr::root()
        .then(Expr::datetime(None))
        .then(Expr::filter(eq(Expr::current(), Expr::var("x"))));

    assert!(lax(expr, &Bindings::new().bind("x", VarType::Date)));
}

#[test]
fn current_item_status_is_restored_after_inner_filter() {
    let inner = Expr::current()
        .then(Expr::key("a"))
        .then(Expr::filter(Expr::binary(
            BinaryOp::Greater,
            Expr::current(),
            num("1"),
        )));
    let expr = Expr::var("x").then(Expr::filter(Expr::binary(
        BinaryOp::And,
        Expr::unary(UnaryOp::Exists, inner),
        lt(Expr::current(), Expr::var("y")),
    )));

    assert!(lax(expr, &vars(VarType::TimestampTz, VarType::Date)));
}

#[test]
fn array_wildcard_depends_on_mode() {
    let expr = || {
        Expr::var("x")
            .then(Expr::any_array())
            .then(Expr::filter(lt(Expr::current(), Expr::var("y"))))
    };
    let bindings = vars(VarType::TimestampTz, VarType::Date);

    assert!(lax(expr(), &bindings));
    assert!(!strict(expr(), &bindings));
}

#[test]
fn index_array_depends_on_mode() {
    let expr = || {
        Expr::var("x")
            .then(Expr::index(vec![Subscript::index(num("0"))]))
            .then(Expr::filter(lt(Expr::current(), Expr::var("y"))))
    };
    let bindings = vars(VarType::TimestampTz, VarType::Date);

    assert!(lax(expr(), &bindings));
    assert!(!strict(expr(), &bindings));
}

#[test]
fn any_level_wildcard_from_zero_keeps_status() {
    let expr = |first| {
        Expr::var("x")
            .then(Expr::any(first, u32::MAX))
            .then(Expr::filter(lt(Expr::current(), Expr::var("y"))))
    };
    let bindings = vars(VarType::TimestampTz, VarType::Date);

    assert!(lax(expr(0), &bindings));
    assert!(strict(expr(0), &bindings));
    assert!(!lax(expr(1), &bindings));
}

#[test]
fn comparison_inside_subscript() {
    let expr = Expr::root().then(Expr::index(vec![Subscript::range(
        num("0"),
        Expr::unary(UnaryOp::Minus, lt(Expr::var("x"), Expr::var("y"))),
    )]));

    assert!(lax(expr, &vars(VarType::Time, VarType::TimeTz)));
}

#[test]
fn comparison_inside_like_regex_operand() {
    let expr = Expr::root().then(Expr::filter(Expr::like_regex(
        Expr::current()
            .then(Expr::key("a"))
            .then(Expr::filter(lt(Expr::var("x"), Expr::var("y")))),
        "^a",
        RegexFlags::NONE,
    )));

    assert!(lax(expr, &vars(VarType::Time, VarType::TimeTz)));
}

#[test]
fn comparison_inside_constructors() {
    let cmp = || lt(Expr::var("x"), Expr::var("y"));
    let bindings = vars(VarType::Date, VarType::TimestampTz);
    let pg = |expr| mutable(ParsedPath::lax(expr).with_extensions(), &bindings);

    assert!(pg(Expr::sequence(vec![num("1"), cmp()])));
    assert!(pg(Expr::array(Some(cmp()))));
    assert!(pg(Expr::object(vec![(Expr::string("k"), cmp())])));
    assert!(!pg(Expr::sequence(vec![num("1"), Expr::var("x")])));
}

#[test]
fn status_lattice() {
    use DatetimeStatus::*;

    assert!(DateTimeZoned.comparison_is_mutable(DateTimeNonZoned));
    assert!(UnknownDateTime.comparison_is_mutable(UnknownDateTime));
    assert!(UnknownDateTime.comparison_is_mutable(DateTimeNonZoned));
    assert!(!DateTimeZoned.comparison_is_mutable(DateTimeZoned));
    assert!(!NonDateTime.comparison_is_mutable(UnknownDateTime));
    assert!(!DateTimeNonZoned.comparison_is_mutable(NonDateTime));

    assert_eq!(DatetimeStatus::from(VarType::Date), DateTimeNonZoned);
    assert_eq!(DatetimeStatus::from(VarType::TimeTz), DateTimeZoned);
    assert_eq!(DatetimeStatus::from(VarType::Other), NonDateTime);
}

#[test]
fn backslash_before_zone_field_keeps_it_zoned() {
    let expr = lt(datetime_of("a", Some(r"HH24:MI \TZH")), Expr::var("z"));

    assert!(!lax(expr, &Bindings::new().bind("z", VarType::TimestampTz)));
}

#[test]
fn classification_respects_limits() {
    let path = JsonPath::encode(&ParsedPath::lax(
        Expr::root().then(Expr::filter(lt(Expr::var("x"), Expr::var("y")))),
    ))
    .unwrap();
    let bindings = vars(VarType::Date, VarType::TimestampTz);

    assert!(matches!(
        path.is_mutable_with_limits(&bindings, &Limits::new().recursion_limit(2)),
        Err(Error::Limit(LimitError::RecursionLimitExceeded(2)))
    ));
    assert!(
        path.is_mutable_with_limits(&bindings, &Limits::new().recursion_limit(3))
            .unwrap()
    );
}

#[test]
fn cancelled_classification() {
    let token = CancelToken::new();
    token.cancel();
    let path = JsonPath::encode(&ParsedPath::lax(Expr::root())).unwrap();

    assert!(matches!(
        path.is_mutable_with_limits(&Bindings::new(), &Limits::new().cancel_token(token)),
        Err(Error::Limit(LimitError::Cancelled))
    ));
}
