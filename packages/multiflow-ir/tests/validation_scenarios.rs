//! End-to-end validation scenarios driven through the public API only.

mod common;

use common::{binary_float, double_producer, float_predicate, unary_float, BOOL, FLOAT};
use multiflow_ir::{check, InterfaceType, Procedure, Violation};

/// `F(in a, out b); Destruct a; Return` with signature `(in a, out b)`.
#[test]
fn empty_body_identity_validates() {
    let mut procedure = Procedure::new();
    let a = procedure.new_variable(FLOAT, Some("a".to_string()));
    let b = procedure.new_variable(FLOAT, Some("b".to_string()));
    procedure.add_parameter(InterfaceType::Input, a);
    procedure.add_parameter(InterfaceType::Output, b);

    let call = procedure.new_call_instruction(unary_float("f"));
    procedure.set_call_params(call, &[a, b]);
    let drop_a = procedure.new_destruct_instruction();
    procedure.set_destruct_variable(drop_a, Some(a));
    let ret = procedure.new_return_instruction();
    procedure.set_call_next(call, Some(drop_a.into()));
    procedure.set_destruct_next(drop_a, Some(ret.into()));
    procedure.set_entry(call.into());

    assert!(procedure.validate());
    procedure.assert_valid();
}

/// The same body with the call's slots swapped reads `b` before anything
/// wrote it and never produces the output parameter.
#[test]
fn swapped_identity_fails() {
    let mut procedure = Procedure::new();
    let a = procedure.new_variable(FLOAT, Some("a".to_string()));
    let b = procedure.new_variable(FLOAT, Some("b".to_string()));
    procedure.add_parameter(InterfaceType::Input, a);
    procedure.add_parameter(InterfaceType::Output, b);

    let call = procedure.new_call_instruction(unary_float("f"));
    procedure.set_call_params(call, &[b, a]);
    let drop_a = procedure.new_destruct_instruction();
    procedure.set_destruct_variable(drop_a, Some(a));
    let ret = procedure.new_return_instruction();
    procedure.set_call_next(call, Some(drop_a.into()));
    procedure.set_destruct_next(drop_a, Some(ret.into()));
    procedure.set_entry(call.into());

    assert!(!procedure.validate());
    let violations = check(&procedure).unwrap_err();
    assert!(violations.contains(&Violation::UseOfMaybeUninitialized {
        instruction: call.into(),
        variable: b
    }));
    assert!(violations.contains(&Violation::OutputMaybeInitialized {
        instruction: call.into(),
        variable: a
    }));
}

/// `H(out x, out y)` with the same variable in both slots.
#[test]
fn double_output_aliasing_fails() {
    let mut procedure = Procedure::new();
    let v = procedure.new_variable(FLOAT, None);
    let call = procedure.new_call_instruction(double_producer("h"));
    procedure.set_call_params(call, &[v, v]);
    let ret = procedure.new_return_instruction();
    procedure.set_call_next(call, Some(ret.into()));
    procedure.set_entry(call.into());

    assert_eq!(
        check(&procedure),
        Err(vec![Violation::AliasedCallParams {
            instruction: call.into(),
            variable: v
        }])
    );
}

/// `G(in x, in x)` is fine: inputs may alias.
#[test]
fn input_aliasing_validates() {
    let mut procedure = Procedure::new();
    let x = procedure.new_variable(FLOAT, Some("x".to_string()));
    let z = procedure.new_variable(FLOAT, Some("z".to_string()));
    procedure.add_parameter(InterfaceType::Input, x);
    procedure.add_parameter(InterfaceType::Output, z);

    let call = procedure.new_call_instruction(binary_float("g"));
    procedure.set_call_params(call, &[x, x, z]);
    let drop_x = procedure.new_destruct_instruction();
    procedure.set_destruct_variable(drop_x, Some(x));
    let ret = procedure.new_return_instruction();
    procedure.set_call_next(call, Some(drop_x.into()));
    procedure.set_destruct_next(drop_x, Some(ret.into()));
    procedure.set_entry(call.into());

    assert!(procedure.validate());
}

/// A join where only one arm produced `v` leaves both state bits set, which
/// satisfies every downstream requirement; producing `v` on both arms and
/// returning without a destruct trips the leak rule instead.
#[test]
fn branch_join_initialization() {
    let mut procedure = Procedure::new();
    let cond = procedure.new_variable(BOOL, Some("cond".to_string()));
    let x = procedure.new_variable(FLOAT, None);
    let v = procedure.new_variable(FLOAT, Some("v".to_string()));
    let out = procedure.new_variable(FLOAT, None);
    procedure.add_parameter(InterfaceType::Mutable, cond);
    procedure.add_parameter(InterfaceType::Mutable, x);
    procedure.add_parameter(InterfaceType::Output, out);

    let branch = procedure.new_branch_instruction();
    procedure.set_branch_condition(branch, Some(cond));
    let assign = procedure.new_call_instruction(unary_float("f"));
    procedure.set_call_params(assign, &[x, v]);
    let join = procedure.new_dummy_instruction();
    let consume = procedure.new_call_instruction(unary_float("f"));
    procedure.set_call_params(consume, &[v, out]);
    let drop_v = procedure.new_destruct_instruction();
    procedure.set_destruct_variable(drop_v, Some(v));
    let ret = procedure.new_return_instruction();

    procedure.set_branch_true(branch, Some(assign.into()));
    procedure.set_branch_false(branch, Some(join.into()));
    procedure.set_call_next(assign, Some(join.into()));
    procedure.set_dummy_next(join, Some(consume.into()));
    procedure.set_call_next(consume, Some(drop_v.into()));
    procedure.set_destruct_next(drop_v, Some(ret.into()));
    procedure.set_entry(branch.into());

    // Ambiguous init state passes both the consumer and the destruct.
    assert!(procedure.validate());
}

/// Producing `v` on both arms and returning without a destruct leaves a
/// definitely-initialized local at the return.
#[test]
fn branch_join_leak_fails() {
    let mut procedure = Procedure::new();
    let cond = procedure.new_variable(BOOL, Some("cond".to_string()));
    let x = procedure.new_variable(FLOAT, None);
    let v = procedure.new_variable(FLOAT, Some("v".to_string()));
    procedure.add_parameter(InterfaceType::Mutable, cond);
    procedure.add_parameter(InterfaceType::Mutable, x);

    let branch = procedure.new_branch_instruction();
    procedure.set_branch_condition(branch, Some(cond));
    let assign_true = procedure.new_call_instruction(unary_float("f"));
    procedure.set_call_params(assign_true, &[x, v]);
    let assign_false = procedure.new_call_instruction(unary_float("f"));
    procedure.set_call_params(assign_false, &[x, v]);
    let join = procedure.new_dummy_instruction();
    let ret = procedure.new_return_instruction();

    procedure.set_branch_true(branch, Some(assign_true.into()));
    procedure.set_branch_false(branch, Some(assign_false.into()));
    procedure.set_call_next(assign_true, Some(join.into()));
    procedure.set_call_next(assign_false, Some(join.into()));
    procedure.set_dummy_next(join, Some(ret.into()));
    procedure.set_entry(branch.into());

    assert_eq!(
        check(&procedure),
        Err(vec![Violation::ReturnWithLiveVariable {
            instruction: ret.into(),
            variable: v
        }])
    );
}

/// Loop whose back edge returns to the header; the analyzer's visited set
/// bounds the walk.
#[test]
fn loop_with_mutable_condition_validates() {
    let mut procedure = Procedure::new();
    let cond = procedure.new_variable(BOOL, Some("cond".to_string()));
    let x = procedure.new_variable(FLOAT, None);
    let v = procedure.new_variable(FLOAT, None);
    procedure.add_parameter(InterfaceType::Mutable, cond);
    procedure.add_parameter(InterfaceType::Mutable, x);

    let branch = procedure.new_branch_instruction();
    procedure.set_branch_condition(branch, Some(cond));
    let body = procedure.new_call_instruction(unary_float("f"));
    procedure.set_call_params(body, &[x, v]);
    let drop_v = procedure.new_destruct_instruction();
    procedure.set_destruct_variable(drop_v, Some(v));
    let ret = procedure.new_return_instruction();

    procedure.set_branch_true(branch, Some(body.into()));
    procedure.set_call_next(body, Some(drop_v.into()));
    procedure.set_destruct_next(drop_v, Some(branch.into()));
    procedure.set_branch_false(branch, Some(ret.into()));
    procedure.set_entry(branch.into());

    assert!(procedure.validate());
}

/// An output parameter without a producer fails; adding a producing call on
/// the path to the return repairs the procedure.
#[test]
fn output_parameter_needs_a_producer() {
    let mut procedure = Procedure::new();
    let x = procedure.new_variable(FLOAT, None);
    let out = procedure.new_variable(FLOAT, None);
    procedure.add_parameter(InterfaceType::Mutable, x);
    procedure.add_parameter(InterfaceType::Output, out);

    let ret = procedure.new_return_instruction();
    procedure.set_entry(ret.into());
    assert_eq!(
        check(&procedure),
        Err(vec![Violation::ReturnMissingOutput {
            instruction: ret.into(),
            variable: out
        }])
    );

    let produce = procedure.new_call_instruction(unary_float("f"));
    procedure.set_call_params(produce, &[x, out]);
    procedure.set_call_next(produce, Some(ret.into()));
    procedure.set_entry(produce.into());
    assert!(procedure.validate());
}

/// A predicate feeding a branch, both arms ending in their own return.
#[test]
fn diamond_with_predicate_validates() {
    let mut procedure = Procedure::new();
    let x = procedure.new_variable(FLOAT, Some("x".to_string()));
    let flag = procedure.new_variable(BOOL, None);
    procedure.add_parameter(InterfaceType::Mutable, x);

    let test = procedure.new_call_instruction(float_predicate("is_positive"));
    procedure.set_call_params(test, &[x, flag]);
    let branch = procedure.new_branch_instruction();
    procedure.set_branch_condition(branch, Some(flag));
    let drop_then = procedure.new_destruct_instruction();
    procedure.set_destruct_variable(drop_then, Some(flag));
    let drop_else = procedure.new_destruct_instruction();
    procedure.set_destruct_variable(drop_else, Some(flag));
    let ret_then = procedure.new_return_instruction();
    let ret_else = procedure.new_return_instruction();

    procedure.set_call_next(test, Some(branch.into()));
    procedure.set_branch_true(branch, Some(drop_then.into()));
    procedure.set_branch_false(branch, Some(drop_else.into()));
    procedure.set_destruct_next(drop_then, Some(ret_then.into()));
    procedure.set_destruct_next(drop_else, Some(ret_else.into()));
    procedure.set_entry(test.into());

    assert!(procedure.validate());
}
