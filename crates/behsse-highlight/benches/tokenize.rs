use behsse_highlight::{highlight, tokenize, OutputFormat, RenderOptions, Theme};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SNIPPET: &str = r#"import { cn } from "@/lib/utils"

export function Card({ className, ...props }: React.HTMLAttributes<HTMLDivElement>) {
  const handleClick = (event) => console.log(event)
  return (
    <div className={cn("rounded-lg border", className)} onClick={handleClick} {...props}>
      Card content
    </div>
  )
}
"#;

fn bench_tokenize(c: &mut Criterion) {
    let source = SNIPPET.repeat(32);
    c.bench_function("tokenize", |b| b.iter(|| tokenize(black_box(&source))));
    c.bench_function("highlight_html", |b| {
        b.iter(|| {
            highlight(
                black_box(&source),
                OutputFormat::Html,
                &Theme::default(),
                &RenderOptions::default(),
            )
        })
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
