#![cfg(test)]

use soroban_sdk::{testutils::Events, vec, Error, IntoVal, Symbol};
use test_suites::test_fixture::{TestFixture, ONE_WEEK, SCALAR_7};

#[test]
fn test_contribute() {
    let fixture = TestFixture::create(ONE_WEEK, 100 * SCALAR_7);
    let e = &fixture.env;
    let samwise = fixture.users[0].clone();

    fixture.crowdfund.contribute(&samwise, &(10 * SCALAR_7));

    let event = vec![e, fixture.env.events().all().last_unchecked()];
    assert_eq!(
        event,
        vec![
            e,
            (
                fixture.crowdfund.address.clone(),
                (Symbol::new(e, "contribute"), samwise.clone()).into_val(e),
                (10 * SCALAR_7).into_val(e)
            )
        ]
    );

    assert_eq!(fixture.crowdfund.contributions(&samwise), 10 * SCALAR_7);
    assert_eq!(fixture.crowdfund.total_raised(), 10 * SCALAR_7);
    assert_eq!(fixture.token.balance(&samwise), 990 * SCALAR_7);
    assert_eq!(
        fixture.token.balance(&fixture.crowdfund.address),
        10 * SCALAR_7
    );
}

#[test]
fn test_contribute_totals_track_every_deposit() {
    let fixture = TestFixture::create(ONE_WEEK, 100 * SCALAR_7);
    let samwise = fixture.users[0].clone();
    let frodo = fixture.users[1].clone();

    fixture.crowdfund.contribute(&samwise, &(10 * SCALAR_7));
    fixture.crowdfund.contribute(&frodo, &(7 * SCALAR_7));
    fixture.crowdfund.contribute(&samwise, &(3 * SCALAR_7));

    assert_eq!(fixture.crowdfund.contributions(&samwise), 13 * SCALAR_7);
    assert_eq!(fixture.crowdfund.contributions(&frodo), 7 * SCALAR_7);
    assert_eq!(fixture.crowdfund.total_raised(), 20 * SCALAR_7);
    assert_eq!(
        fixture.token.balance(&fixture.crowdfund.address),
        20 * SCALAR_7
    );
}

#[test]
fn test_contribute_after_deadline_fails() {
    let fixture = TestFixture::create(ONE_WEEK, 100 * SCALAR_7);
    let samwise = fixture.users[0].clone();

    fixture.jump(ONE_WEEK);

    let result = fixture.crowdfund.try_contribute(&samwise, &(10 * SCALAR_7));
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(100))));
    assert_eq!(fixture.crowdfund.total_raised(), 0);
    assert_eq!(fixture.token.balance(&samwise), 1000 * SCALAR_7);
}

#[test]
#[should_panic(expected = "Error(Contract, #101)")]
fn test_contribute_zero_fails() {
    let fixture = TestFixture::create(ONE_WEEK, 100 * SCALAR_7);
    let samwise = fixture.users[0].clone();

    fixture.crowdfund.contribute(&samwise, &0);
}

#[test]
#[should_panic(expected = "Error(Contract, #8)")]
fn test_contribute_negative_fails() {
    let fixture = TestFixture::create(ONE_WEEK, 100 * SCALAR_7);
    let samwise = fixture.users[0].clone();

    fixture.crowdfund.contribute(&samwise, &(-5 * SCALAR_7));
}

#[test]
fn test_contribute_at_exact_deadline_fails() {
    let fixture = TestFixture::create(ONE_WEEK, 100 * SCALAR_7);
    let samwise = fixture.users[0].clone();

    // the round is concluded at `end`, not one second after
    fixture.jump(ONE_WEEK - 1);
    fixture.crowdfund.contribute(&samwise, &SCALAR_7);

    fixture.jump(1);
    let result = fixture.crowdfund.try_contribute(&samwise, &SCALAR_7);
    assert_eq!(result.err(), Some(Ok(Error::from_contract_error(100))));
}
