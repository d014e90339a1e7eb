use yew::prelude::*;

use crate::components::floating_icons::FloatingIcons;
use crate::components::scroll_paragraph::ScrollParagraph;
use crate::navigation::{scroll_to_section, STORY, STORY_CTA, STORY_START};

#[derive(Properties, PartialEq)]
pub struct StoryProps {
    /// Opens the lead capture modal.
    pub on_join: Callback<()>,
}

fn block_label(text: &'static str) -> Html {
    html! { <span class="story__label">{ text }</span> }
}

#[function_component(Story)]
pub fn story(props: &StoryProps) -> Html {
    let to_start = Callback::from(|_: MouseEvent| scroll_to_section(STORY_START));
    let join = props.on_join.reform(|_: MouseEvent| ());

    html! {
        <section id={STORY} class="story">
            <FloatingIcons />

            <div class="story__intro">
                <h2 class="story__title">{"Мой путь"}</h2>
                <p class="story__tagline">{"от интереса к действию"}</p>
            </div>

            <div class="story__body">
                <ScrollParagraph class="centered">
                    <p class="gap">
                        {"Я работаю с нейросетями"}<br />
                        {"не потому что это модно."}<br />
                        <strong>{"А потому что это работает."}</strong>
                    </p>
                    <p class="muted small gap">
                        {"С 2023 года."}<br />
                        {"От первых диалогов с ChatGPT 3.5"}<br />
                        {"до реальных продуктов и автоматизаций."}
                    </p>
                    <p class="muted small gap-lg">
                        {"Без магии."}<br />
                        {"Без инфо-шума."}<br />
                        {"Через понимание и действие."}
                    </p>
                    <button class="story__pill" onclick={to_start}>
                        {"Посмотреть путь ↓"}
                    </button>
                </ScrollParagraph>

                <div id={STORY_START} class="story__divider"></div>

                <ScrollParagraph>
                    { block_label("Блок 1. Начало") }
                    <h3>{"Любопытство"}</h3>
                    <p class="gap">
                        {"Я в нейросетях с момента появления ChatGPT 3.5. Тогда это не было рынком. Не было индустрией."}
                    </p>
                    <p class="muted gap">
                        {"Это был сырой инструмент. Я просто общался с ИИ. Проверял границы. Смотрел, как он думает."}
                    </p>
                    <p class="muted quote">
                        {"Без курсов. Без хайпа. Без обещаний быстрых денег."}
                    </p>
                    <p class="medium top">
                        {"Любопытство — искра."}<br />
                        {"Огонь начинается позже."}
                    </p>
                </ScrollParagraph>

                <ScrollParagraph>
                    { block_label("Блок 2. Направление") }
                    <h3>{"Понимание"}</h3>
                    <p class="gap">{"Потом появился Midjourney. Затем — другие инструменты."}</p>
                    <p class="gap">
                        {"И стало ясно:"}<br />
                        <span class="highlight">{"нейросети — это новый язык."}</span><br />
                        {"И рынок будет говорить на нём."}
                    </p>
                    <p class="muted">
                        {"Пока одни спорили «пузырь это или нет», я учился думать через ИИ, а не просто нажимать кнопки."}
                    </p>
                </ScrollParagraph>

                <ScrollParagraph>
                    { block_label("Блок 3. Теория") }
                    <h3>{"Знаний было много"}</h3>
                    <p class="gap">{"За это время я прошёл:"}</p>
                    <ul class="story__dots gap-lg">
                        <li>{"2 курса по Instagram и Reels"}</li>
                        <li>{"YouTube Shorts"}</li>
                        <li>{"Wildberries"}</li>
                        <li>{"P2P"}</li>
                    </ul>
                    <p class="muted gap">{"Стратегии. Воронки. Алгоритмы. Психология внимания."}</p>
                    <div class="story__note">
                        <p class="medium">
                            {"Информации — много."}<br />
                            <span class="danger">{"Результатов — нет, если не действуешь."}</span>
                        </p>
                    </div>
                </ScrollParagraph>

                <ScrollParagraph>
                    { block_label("Блок 4. Осознание") }
                    <h3>{"Неприятная правда"}</h3>
                    <p class="gap">{"Можно пройти десятки курсов. Можно знать больше всех."}</p>
                    <p class="gap bold">
                        {"Но если ты не действуешь —"}<br />
                        {"ты никто на рынке."}
                    </p>
                    <p class="muted gap">
                        {"Знание без действия — балласт."}<br />
                        {"Действие без знания — хаос."}
                    </p>
                    <p class="story__stamp">{"Результат даёт только связка."}</p>
                    <p class="muted top">
                        {"Сегодня каждый что-то знает."}<br />
                        {"Но единицы воплощают."}
                    </p>
                </ScrollParagraph>

                <ScrollParagraph>
                    { block_label("Блок 5. Подход") }
                    <h3>{"Как я работаю"}</h3>
                    <p class="muted gap">{"Я не продаю волшебные кнопки. Я не обещаю лёгких денег."}</p>
                    <p class="gap">{"Я работаю на пересечении:"}</p>
                    <div class="story__tags gap-lg">
                        <span>{"нейросетей"}</span>
                        <span>{"контента"}</span>
                        <span>{"маркетингового мышления"}</span>
                        <span>{"реального применения"}</span>
                    </div>
                    <p class="bold">
                        {"Мой фокус — результат."}<br />
                        <span class="muted normal">{"Не имитация движения."}</span>
                    </p>
                </ScrollParagraph>

                <ScrollParagraph>
                    { block_label("Блок 6. Доказательства") }
                    <h3>{"Не слова. Факты."}</h3>
                    <p class="gap-lg"><span class="story__date">{"02.02.2026"}</span></p>
                    <p class="medium gap">{"Этот сайт полностью создан с помощью нейросетей."}</p>
                    <p class="muted">{"Дальше:"}</p>
                    <ul class="story__arrows gap-lg">
                        <li>{"→ ещё 3 сайта"}</li>
                        <li>{"→ 3 чат-бота"}</li>
                        <li>{"→ 3 автоматизации"}</li>
                    </ul>
                    <div class="story__note">
                        <p>{"Не «когда-нибудь»."}</p>
                        <p>{"А чтобы было что показать."}</p>
                        <p class="bold">{"Экспертность без артефактов — это шум. Навык должен быть виден."}</p>
                    </div>
                </ScrollParagraph>

                <ScrollParagraph>
                    { block_label("Блок 7. Мотивация") }
                    <h3>{"Зачем мне это"}</h3>
                    <p class="story__shout">{"Я устал."}</p>
                    <p class="gap">{"Устал видеть, как людям продают:"}</p>
                    <ul class="story__bullets muted gap-lg">
                        <li>{"сотни промтов за деньги"}</li>
                        <li>{"PDF с «секретами ИИ»"}</li>
                        <li>{"иллюзию понимания"}</li>
                    </ul>
                    <p class="gap">
                        {"Особенно новичкам. Для них эти списки —"}
                        <span class="story__aside">{"как квантовая физика на китайском."}</span>
                    </p>
                </ScrollParagraph>

                <ScrollParagraph>
                    { block_label("Блок 8. Ошибка") }
                    <h3>{"Которую я прошёл сам"}</h3>
                    <p class="muted gap">{"Раньше я тоже думал: нейросети «и так всё понимают»."}</p>
                    <p class="gap">{"Что нужно просто дать ей команду."}</p>
                    <p class="bold danger gap-lg">{"Это не так."}</p>
                    <div class="muted gap-lg">
                        <p>{"Нейросеть:"}</p>
                        <ul class="quote">
                            <li>{"— не слышит тебя так, как ты думаешь"}</li>
                            <li>{"— не понимает контекст автоматически"}</li>
                            <li>{"— не читает твои мысли"}</li>
                        </ul>
                    </div>
                    <p class="medium">{"Без понимания ты всегда упрёшься в потолок."}</p>
                </ScrollParagraph>

                <ScrollParagraph>
                    { block_label("Блок 9. Что я даю") }
                    <h3>{"И почему бесплатно"}</h3>
                    <p class="gap">{"Здесь я дам тебе бесплатные уроки."}</p>
                    <p class="medium gap-lg">
                        {"Не про промты."}<br />
                        {"А про "}<span class="accent">{"понимание"}</span>{" нейросетей."}
                    </p>
                    <ul class="story__checks muted gap-lg">
                        <li>{"как ИИ интерпретирует смысл"}</li>
                        <li>{"почему одинаковые запросы дают разный результат"}</li>
                        <li>{"как говорить с нейросетью, чтобы она работала на тебя"}</li>
                    </ul>
                    <p class="heading">{"Понимание сильнее любых хаков."}</p>
                </ScrollParagraph>

                <ScrollParagraph>
                    { block_label("Блок 10. Результат") }
                    <h3>{"Что ты получишь"}</h3>
                    <div class="story__cards">
                        <div class="story__card">
                            <h4>{"Минимум:"}</h4>
                            <ul>
                                <li>{"— ускорение рутинных задач"}</li>
                                <li>{"— быстрый поиск и анализ"}</li>
                                <li>{"— меньше хаоса"}</li>
                                <li>{"— больше контроля"}</li>
                            </ul>
                        </div>
                        <div class="story__card story__card--dark">
                            <h4>{"Максимум:"}</h4>
                            <p>{"ты начнёшь думать вместе с нейросетью, а не просто пользоваться ей."}</p>
                        </div>
                    </div>
                </ScrollParagraph>

                <ScrollParagraph class={classes!("centered", "story__final")} closing=true>
                    <div id={STORY_CTA} class="story__cta-anchor">
                        <h3 class="story__cta-title">
                            {"Я не обещаю лёгкий путь."}<br />
                            <span class="accent">{"Но обещаю честный."}</span>
                        </h3>
                        <p class="muted story__cta-text">
                            {"Если тебе близок принцип «сначала понять — потом масштабировать» — ты по адресу."}
                        </p>
                    </div>
                    <div class="story__actions">
                        <button class="story__primary" onclick={join}>
                            {"Начать с бесплатных уроков"}
                        </button>
                        <button class="story__secondary">
                            {"Посмотреть проекты →"}
                        </button>
                    </div>
                </ScrollParagraph>
            </div>

            <style>
                {r#"
                .story {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                    padding: 10rem 0;
                    overflow: hidden;
                }
                .story__intro {
                    position: relative;
                    z-index: 10;
                    height: 20vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 5rem;
                }
                .story__title {
                    font-family: var(--font-heading);
                    font-size: clamp(3rem, 8vw, 15vw);
                    font-weight: 500;
                    letter-spacing: -0.025em;
                    line-height: 1;
                    color: rgba(24, 24, 27, 0.05);
                    user-select: none;
                    margin: 0;
                    animation: story-rise 0.8s ease-out both;
                }
                .story__tagline {
                    font-size: 1.5rem;
                    font-weight: 500;
                    color: var(--text-secondary);
                    margin-top: -2rem;
                    animation: story-fade 0.8s ease-out 0.2s both;
                }
                @keyframes story-rise {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes story-fade { from { opacity: 0; } to { opacity: 1; } }
                .story__body {
                    position: relative;
                    z-index: 10;
                    font-size: 1.875rem;
                    font-weight: 500;
                    line-height: 1.5;
                    letter-spacing: -0.025em;
                }
                .scroll-paragraph {
                    max-width: 48rem;
                    margin: 0 auto 8rem;
                    padding: 0 1.5rem;
                    will-change: opacity, transform;
                }
                .scroll-paragraph h3 {
                    font-family: var(--font-heading);
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }
                .scroll-paragraph p { margin: 0; }
                .centered { text-align: center; }
                .gap { margin-bottom: 1.5rem !important; }
                .gap-lg { margin-bottom: 2rem !important; }
                .top { margin-top: 1.5rem !important; }
                .muted { color: var(--text-secondary); }
                .small { font-size: 1.25rem; }
                .medium { font-weight: 500; }
                .bold { font-weight: 700; }
                .normal { font-weight: 400; }
                .heading { font-family: var(--font-heading); font-size: 1.25rem; }
                .danger { color: #ef4444; }
                .highlight { background: #fef9c3; padding: 0 0.25rem; border-radius: 0.25rem; }
                .quote { border-left: 2px solid #e5e7eb; padding-left: 1rem; list-style: none; }
                .story__label {
                    display: block;
                    margin-bottom: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: var(--brand-accent);
                }
                .story__pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: #f3f4f6;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: background 0.2s;
                }
                .story__pill:hover { background: #e5e7eb; }
                .story__divider {
                    width: 100%;
                    height: 4px;
                    margin-bottom: 8rem;
                    opacity: 0.5;
                    background: linear-gradient(to right, transparent, #e5e7eb, transparent);
                }
                .story__dots, .story__arrows, .story__checks { list-style: none; padding: 0; font-size: 1.25rem; }
                .story__dots li::before {
                    content: '';
                    display: inline-block;
                    width: 0.375rem;
                    height: 0.375rem;
                    margin-right: 0.5rem;
                    vertical-align: middle;
                    border-radius: 9999px;
                    background: rgba(37, 99, 235, 0.5);
                }
                .story__arrows li { color: var(--brand-accent); }
                .story__checks li::before { content: '✓'; color: #16a34a; margin-right: 0.75rem; }
                .story__bullets { list-style: disc inside; padding-left: 0.5rem; }
                .story__note {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: rgba(63, 63, 70, 0.05);
                    border: 1px solid rgba(63, 63, 70, 0.1);
                }
                .story__stamp {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    border-radius: 0.5rem;
                    background: var(--brand);
                    color: #fff;
                    transform: rotate(-1deg);
                }
                .story__tags { display: flex; flex-wrap: wrap; gap: 0.75rem; }
                .story__tags span { padding: 0.5rem 1rem; border-radius: 9999px; background: #f3f4f6; font-size: 1rem; }
                .story__date { font-family: monospace; font-size: 0.875rem; background: #000; color: #fff; padding: 0.25rem 0.5rem; border-radius: 0.25rem; }
                .story__shout { font-size: 3rem; font-weight: 700; color: #e5e7eb; margin-bottom: 2rem !important; }
                .story__aside { display: block; margin-top: 0.5rem; font-family: serif; font-style: italic; font-size: 1.5rem; color: #9ca3af; }
                .story__cards { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; font-size: 1rem; }
                .story__card { padding: 1.5rem; border-radius: 1rem; background: #fff; border: 1px solid #f3f4f6; }
                .story__card h4 { margin: 0 0 1rem; color: #6b7280; }
                .story__card ul { list-style: none; padding: 0; margin: 0; }
                .story__card--dark { background: var(--brand); color: #fff; border: none; }
                .story__card--dark h4 { color: rgba(255, 255, 255, 0.8); }
                .story__final { margin-top: 8rem; }
                .story__cta-anchor { scroll-margin-top: 8rem; }
                .story__cta-title { font-size: 3rem !important; font-weight: 500 !important; margin-bottom: 2rem !important; }
                .story__cta-text { font-size: 1.25rem; max-width: 42rem; margin: 0 auto 3rem !important; }
                .story__actions { display: flex; gap: 1rem; justify-content: center; align-items: center; }
                .story__primary, .story__secondary {
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    font-size: 1.125rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: all 0.2s;
                }
                .story__primary { background: var(--brand); color: #fff; border: none; }
                .story__primary:hover { background: var(--brand-accent); }
                .story__secondary { background: #fff; border: 1px solid #e5e7eb; }
                .story__secondary:hover { background: #f9fafb; }
                .story__primary:active, .story__secondary:active { transform: scale(0.95); }
                @media (max-width: 767px) {
                    .story { padding: 4rem 0; }
                    .story__body { font-size: 1.125rem; line-height: 1.6; }
                    .scroll-paragraph { margin-bottom: 6rem; }
                    .story__cards { grid-template-columns: 1fr; }
                    .story__actions { flex-direction: column; }
                    .story__cta-title { font-size: 1.875rem !important; }
                }
                "#}
            </style>
        </section>
    }
}
