use criterion::{black_box, criterion_group, criterion_main, Criterion};
use errata::augment::Augmentor;
use errata::conllu::{parse, Sentence, TagMap};
use errata::forms::Forms;
use errata::rules::RuleSet;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SENTENCES: &str = "# sent_id = 0
1\tYou\tyou\tPRON\tPRP\t_\t3\tnsubj\t_\t_
2\tcan\tcan\tAUX\tMD\t_\t3\taux\t_\t_
3\tlearn\tlearn\tVERB\tVB\t_\t0\troot\t_\t_
4\tquickly\tquickly\tADV\tRB\t_\t3\tadvmod\t_\t_

# sent_id = 1
1\tThey\tthey\tPRON\tPRP\t_\t2\tnsubj\t_\t_
2\tleft\tleave\tVERB\tVBD\t_\t0\troot\t_\t_
3\tthere\tthere\tADV\tRB\t_\t4\tadvmod\t_\t_
4\tbags\tbag\tNOUN\tNNS\t_\t2\tobj\t_\t_
5\tin\tin\tADP\tIN\t_\t7\tcase\t_\t_
6\tthe\tthe\tDET\tDT\t_\t7\tdet\t_\t_
7\tcar\tcar\tNOUN\tNN\t_\t2\tobl\t_\t_

";

fn sentences() -> Vec<Sentence> {
    parse(SENTENCES).map(|s| s.unwrap()).collect()
}

pub fn augment(c: &mut Criterion) {
    let sentences = sentences();
    let tags = TagMap::default();
    let forms = Forms::default();

    for rule_set in [RuleSet::default_structural(), RuleSet::default_literal()] {
        let augmentor = Augmentor::new(&rule_set, &tags, &forms).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        c.bench_function(&format!("try_augment_{}", rule_set.name()), |b| {
            b.iter(|| {
                for s in &sentences {
                    black_box(augmentor.try_augment(black_box(s), &mut rng));
                }
            })
        });
    }
}

pub fn parsing(c: &mut Criterion) {
    let text = SENTENCES.repeat(100);
    c.bench_function("parse_200_sentences", |b| {
        b.iter(|| parse(black_box(&text)).filter(Result::is_ok).count())
    });
}

criterion_group!(benches, augment, parsing);
criterion_main!(benches);
