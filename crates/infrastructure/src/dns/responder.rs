use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record, RecordType};
use std::net::Ipv4Addr;
use warden_dns_domain::BlockingMode;

/// TTL for synthesized block-page A records.
const REDIRECT_TTL: u32 = 60;

/// Reply skeleton: transaction id, question section and RD copied from the
/// query, QR set.
fn base_reply(query: &Message) -> Message {
    let mut reply = Message::new();
    reply.set_id(query.id());
    reply.set_message_type(MessageType::Response);
    reply.set_op_code(OpCode::Query);
    reply.set_recursion_desired(query.recursion_desired());
    for question in query.queries() {
        reply.add_query(question.clone());
    }
    reply
}

/// Synthesize the authoritative reply for a blocked question.
///
/// Only `A` and `ANY` questions get a synthetic A record; other qtypes get
/// an authoritative empty answer (NXDOMAIN mode sets RCODE 3 regardless).
pub fn blocked_reply(
    query: &Message,
    question: &Query,
    mode: BlockingMode,
    block_page_ip: Ipv4Addr,
) -> Message {
    let mut reply = base_reply(query);
    reply.set_authoritative(true);

    let answerable = matches!(question.query_type(), RecordType::A | RecordType::ANY);

    match mode {
        BlockingMode::Nxdomain => {
            reply.set_response_code(ResponseCode::NXDomain);
        }
        BlockingMode::Redirect if answerable => {
            reply.add_answer(Record::from_rdata(
                question.name().clone(),
                REDIRECT_TTL,
                RData::A(A::from(block_page_ip)),
            ));
        }
        BlockingMode::Null if answerable => {
            reply.add_answer(Record::from_rdata(
                question.name().clone(),
                0,
                RData::A(A::from(Ipv4Addr::UNSPECIFIED)),
            ));
        }
        _ => {}
    }

    reply
}

/// Graft the upstream's answer section onto a reply to the original query.
/// Not authoritative; RCODE, RA and TC are taken from upstream.
pub fn forwarded_reply(query: &Message, upstream: &Message) -> Message {
    let mut reply = base_reply(query);
    reply.set_response_code(upstream.response_code());
    reply.set_recursion_available(upstream.recursion_available());
    reply.set_truncated(upstream.truncated());
    for answer in upstream.answers() {
        reply.add_answer(answer.clone());
    }
    reply
}

/// NOERROR with no records: the observable shape of an upstream failure.
pub fn empty_reply(query: &Message) -> Message {
    base_reply(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::rr::{DNSClass, Name};

    fn query_for(domain: &str, qtype: RecordType) -> Message {
        let mut message = Message::new();
        message.set_id(0x2b4d);
        message.set_message_type(MessageType::Query);
        message.set_op_code(OpCode::Query);
        message.set_recursion_desired(true);
        let mut question = Query::query(Name::from_ascii(domain).unwrap(), qtype);
        question.set_query_class(DNSClass::IN);
        message.add_query(question);
        message
    }

    #[test]
    fn test_null_mode_synthesizes_zero_address() {
        let query = query_for("ads.example.com.", RecordType::A);
        let question = query.queries()[0].clone();
        let reply = blocked_reply(&query, &question, BlockingMode::Null, Ipv4Addr::LOCALHOST);

        assert_eq!(reply.id(), 0x2b4d);
        assert!(reply.authoritative());
        assert_eq!(reply.answers().len(), 1);
        let record = &reply.answers()[0];
        assert_eq!(record.ttl(), 0);
        assert_eq!(
            record.data(),
            Some(&RData::A(A::from(Ipv4Addr::UNSPECIFIED)))
        );
    }

    #[test]
    fn test_redirect_mode_points_at_block_page() {
        let query = query_for("ads.example.com.", RecordType::A);
        let question = query.queries()[0].clone();
        let target: Ipv4Addr = "192.168.1.10".parse().unwrap();
        let reply = blocked_reply(&query, &question, BlockingMode::Redirect, target);

        assert_eq!(reply.answers().len(), 1);
        let record = &reply.answers()[0];
        assert_eq!(record.ttl(), 60);
        assert_eq!(record.data(), Some(&RData::A(A::from(target))));
    }

    #[test]
    fn test_nxdomain_mode_has_rcode_and_no_answers() {
        let query = query_for("ads.example.com.", RecordType::A);
        let question = query.queries()[0].clone();
        let reply = blocked_reply(&query, &question, BlockingMode::Nxdomain, Ipv4Addr::LOCALHOST);

        assert_eq!(reply.response_code(), ResponseCode::NXDomain);
        assert!(reply.answers().is_empty());
        assert!(reply.authoritative());
    }

    #[test]
    fn test_non_a_question_gets_empty_authoritative_answer() {
        let query = query_for("ads.example.com.", RecordType::AAAA);
        let question = query.queries()[0].clone();
        let reply = blocked_reply(&query, &question, BlockingMode::Redirect, Ipv4Addr::LOCALHOST);

        assert!(reply.answers().is_empty());
        assert!(reply.authoritative());
        assert_eq!(reply.response_code(), ResponseCode::NoError);
    }

    #[test]
    fn test_forwarded_reply_preserves_identity_and_answers() {
        let query = query_for("good.example.com.", RecordType::A);

        let mut upstream = base_reply(&query);
        upstream.set_recursion_available(true);
        upstream.add_answer(Record::from_rdata(
            Name::from_ascii("good.example.com.").unwrap(),
            300,
            RData::A(A::from("93.184.216.34".parse::<Ipv4Addr>().unwrap())),
        ));

        let reply = forwarded_reply(&query, &upstream);
        assert_eq!(reply.id(), query.id());
        assert_eq!(reply.queries(), query.queries());
        assert!(!reply.authoritative());
        assert!(reply.recursion_available());
        assert_eq!(reply.answers().len(), 1);
    }

    #[test]
    fn test_empty_reply_is_noerror_without_records() {
        let query = query_for("good.example.com.", RecordType::A);
        let reply = empty_reply(&query);
        assert_eq!(reply.response_code(), ResponseCode::NoError);
        assert!(reply.answers().is_empty());
        assert_eq!(reply.id(), query.id());
    }
}
