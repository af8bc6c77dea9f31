//! Dice, equation and challenge tests.

use alcoroll::{
    Challenge, Die, DieError, Difficulty, DrinkRule, Equation, EquationError, Operator,
    OperatorPool, PoolError, RevealResult, generate_challenge, generate_operators, roll_dice_set,
    roll_die,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn equation(operands: &[u32], operators: &[Option<Operator>]) -> Equation {
    Equation::from_parts(operands.to_vec(), operators.to_vec()).unwrap()
}

#[test]
fn roll_die_is_inclusive_and_covers_every_face() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut counts = [0usize; 6];

    for _ in 0..6000 {
        let value = roll_die(&mut rng, 6).unwrap();
        assert!((1..=6).contains(&value));
        counts[usize::from(value) - 1] += 1;
    }

    for count in counts {
        assert!(count > 800, "face count {count} is far from uniform");
    }

    for _ in 0..50 {
        assert_eq!(roll_die(&mut rng, 1).unwrap(), 1);
    }
    assert_eq!(roll_die(&mut rng, 0).unwrap_err(), DieError::ZeroSides);
}

#[test]
fn dice_set_rolls_requested_count() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let rolls = roll_dice_set(&mut rng, Die::D4, 10);
    assert_eq!(rolls.len(), 10);
    assert!(rolls.iter().all(|value| (1..=4).contains(value)));
    assert!(roll_dice_set(&mut rng, Die::D6, 0).is_empty());
    assert_eq!(Die::new(4).unwrap().sides(), 4);
}

#[test]
fn two_dice_added() {
    let equation = equation(&[3, 5], &[Some(Operator::Add)]);
    assert_eq!(equation.evaluate(), Some(8));
    assert_eq!(equation.to_string(), "3 + 5");
}

#[test]
fn single_die_is_its_own_value() {
    let mut equation = Equation::new();
    equation.push(6);
    assert!(equation.operators().is_empty());
    assert!(equation.is_complete());
    assert_eq!(equation.evaluate(), Some(6));
}

#[test]
fn unset_operator_has_no_result() {
    let mut equation = Equation::new();
    equation.push(3);
    equation.push(5);
    equation.push_with(Operator::Mul, 2);

    assert_eq!(equation.operators(), &[None, Some(Operator::Mul)]);
    assert!(!equation.is_complete());
    assert_eq!(equation.evaluate(), None);
    assert_eq!(equation.to_string(), "3 ? 5 × 2");
    assert_eq!(Equation::new().evaluate(), None);
}

#[test]
fn evaluation_honours_precedence_and_rounds() {
    use Operator::{Add, Div, Mul, Sub};

    assert_eq!(equation(&[2, 3, 4], &[Some(Add), Some(Mul)]).evaluate(), Some(14));
    assert_eq!(equation(&[10, 2, 3], &[Some(Sub), Some(Mul)]).evaluate(), Some(4));
    assert_eq!(equation(&[7, 2], &[Some(Div)]).evaluate(), Some(4));
    assert_eq!(equation(&[1, 3], &[Some(Div)]).evaluate(), Some(0));
    assert_eq!(
        equation(&[6, 4, 2, 3], &[Some(Div), Some(Add), Some(Mul)]).evaluate(),
        Some(8)
    );
    assert_eq!(equation(&[1, 6], &[Some(Sub)]).evaluate(), Some(-5));
}

#[test]
fn halves_round_up() {
    use Operator::{Div, Sub};

    assert_eq!(equation(&[1, 7, 2], &[Some(Sub), Some(Div)]).evaluate(), Some(-2));
    assert_eq!(equation(&[5, 2], &[Some(Div)]).evaluate(), Some(3));
    assert_eq!(equation(&[1, 1, 2], &[Some(Sub), Some(Div)]).evaluate(), Some(1));
}

#[test]
fn evaluation_is_deterministic() {
    use Operator::{Add, Div, Mul, Sub};

    let equation = equation(
        &[5, 3, 6, 2, 4],
        &[Some(Mul), Some(Sub), Some(Div), Some(Add)],
    );
    let first = equation.evaluate();
    assert_eq!(first, Some(16));
    assert_eq!(equation.evaluate(), first);
}

#[test]
fn non_finite_evaluation_has_no_result() {
    let by_zero = equation(&[4, 0], &[Some(Operator::Div)]);
    assert_eq!(by_zero.evaluate(), None);

    let zero_by_zero = equation(&[0, 0, 3], &[Some(Operator::Div), Some(Operator::Add)]);
    assert_eq!(zero_by_zero.evaluate(), None);

    assert_eq!(RevealResult::from_evaluation(by_zero.evaluate()), RevealResult::Invalid);
    assert_eq!(RevealResult::Invalid.to_string(), "Invalid");
}

#[test]
fn from_parts_checks_slot_count() {
    assert_eq!(
        Equation::from_parts(vec![1, 2], vec![]).unwrap_err(),
        EquationError::OperatorCount {
            operands: 2,
            expected: 1,
            operators: 0,
        }
    );
    assert!(Equation::from_parts(vec![], vec![]).is_ok());
    assert!(Equation::from_parts(vec![], vec![Some(Operator::Add)]).is_err());
}

#[test]
fn cycling_walks_every_operator() {
    let mut equation = Equation::new();
    equation.push(1);
    equation.push(2);

    let seen: Vec<_> = (0..5)
        .map(|_| equation.cycle_operator(0).unwrap())
        .collect();
    assert_eq!(
        seen,
        [
            Operator::Add,
            Operator::Sub,
            Operator::Mul,
            Operator::Div,
            Operator::Add
        ]
    );
    assert_eq!(equation.cycle_operator(1), None);
    assert!(equation.set_operator(0, Operator::Mul));
    assert!(!equation.set_operator(3, Operator::Mul));
    assert_eq!(equation.evaluate(), Some(2));
}

#[test]
fn pop_removes_operand_and_slot() {
    let mut equation = Equation::new();
    equation.push(4);
    equation.push_with(Operator::Sub, 1);

    assert_eq!(equation.pop(), Some(1));
    assert_eq!(equation.len(), 1);
    assert!(equation.operators().is_empty());
    assert_eq!(equation.pop(), Some(4));
    assert_eq!(equation.pop(), None);
    assert!(equation.is_empty());
}

#[test]
fn operators_come_from_the_pool() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let only_mul = OperatorPool::new(vec![Operator::Mul]).unwrap();
    let drawn = generate_operators(&mut rng, &only_mul, 5);
    assert_eq!(drawn, vec![Operator::Mul; 5]);

    let pool = OperatorPool::default();
    let drawn = generate_operators(&mut rng, &pool, 400);
    assert_eq!(drawn.len(), 400);
    let adds = drawn.iter().filter(|op| **op == Operator::Add).count();
    let divs = drawn.iter().filter(|op| **op == Operator::Div).count();
    assert!(adds > divs, "adds {adds} should outnumber divs {divs}");

    assert_eq!(OperatorPool::new(vec![]).unwrap_err(), PoolError::Empty);
}

#[test]
fn challenge_tiers_follow_level() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for _ in 0..100 {
        for level in 1..=3 {
            let challenge = generate_challenge(&mut rng, level, Difficulty::Normal);
            assert_eq!(challenge.operator, Operator::Add);
        }
        for level in 4..=6 {
            let challenge = generate_challenge(&mut rng, level, Difficulty::Hard);
            assert_eq!(challenge.operator, Operator::Sub);
            assert!(challenge.answer() >= 0);
        }
        for level in 7..=9 {
            let challenge = generate_challenge(&mut rng, level, Difficulty::Easy);
            assert_eq!(challenge.operator, Operator::Mul);
            assert!(challenge.lhs >= 2 && challenge.rhs >= 2);
        }
    }

    // Level 0 is treated as level 1.
    let challenge = generate_challenge(&mut rng, 0, Difficulty::Normal);
    assert_eq!(challenge.operator, Operator::Add);
}

#[test]
fn difficulty_scales_operands() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    for _ in 0..200 {
        let easy = generate_challenge(&mut rng, 1, Difficulty::Easy);
        assert!(easy.lhs <= 8 && easy.rhs <= 8);
        let hard = generate_challenge(&mut rng, 1, Difficulty::Hard);
        assert!(hard.lhs <= 15 && hard.rhs <= 15);
    }
}

#[test]
fn division_challenges_are_exact() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);

    for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
        for level in 10..40 {
            for _ in 0..20 {
                let challenge = generate_challenge(&mut rng, level, difficulty);
                assert_eq!(challenge.operator, Operator::Div);
                assert_eq!(challenge.lhs % challenge.rhs, 0);
                assert_eq!(
                    i64::from(challenge.lhs / challenge.rhs),
                    challenge.answer()
                );
                assert_eq!(challenge.to_equation().evaluate(), Some(challenge.answer()));
            }
        }

        for level in [u32::MAX / 14, u32::MAX / 2, u32::MAX] {
            for _ in 0..20 {
                let challenge = generate_challenge(&mut rng, level, difficulty);
                assert_eq!(challenge.operator, Operator::Div);
                assert_eq!(challenge.lhs % challenge.rhs, 0);
                assert_eq!(
                    i64::from(challenge.lhs / challenge.rhs),
                    challenge.answer()
                );
            }
        }
    }
}

#[test]
fn challenge_renders_as_infix() {
    let challenge = Challenge {
        lhs: 12,
        operator: Operator::Div,
        rhs: 4,
    };
    assert_eq!(challenge.to_string(), "12 ÷ 4");
    assert_eq!(challenge.answer(), 3);
}

#[test]
fn drink_rules() {
    assert_eq!(DrinkRule::Multiply.apply(14, 3), 42);
    assert_eq!(DrinkRule::Add.apply(14, 3), 17);
    assert_eq!(DrinkRule::Subtract.apply(2, 3), 1);
    assert_eq!(DrinkRule::Divide.apply(14, 3), 5);
    assert_eq!(DrinkRule::Divide.apply(12, 3), 4);
}
