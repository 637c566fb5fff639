use chrono::Datelike;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button::{ButtonVariant, PrimeButton};
use crate::components::counter::Counter;
use crate::components::icons;
use crate::components::logo::BrandLogo;
use crate::components::marquee::Marquee;
use crate::components::spotlight::SpotlightCard;
use crate::components::text_reveal::TextReveal;
use crate::config;
use crate::Route;

fn open_whatsapp() -> Callback<MouseEvent> {
    Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url(&config::whatsapp_link());
        }
    })
}

#[function_component(Navbar)]
fn navbar() -> Html {
    let scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    scrolled.set(scroll_top > 50);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    const LINKS: [(&str, &str); 4] = [
        ("Seguro de Vida", "#seguro-vida"),
        ("Resultados", "#provas-sociais"),
        ("Comparativo", "#comparativo"),
        ("Depoimentos", "#depoimentos"),
    ];

    html! {
        <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-brand"><BrandLogo /></a>

                <div class="nav-links">
                    { for LINKS.iter().map(|(name, href)| html! {
                        <a class="nav-link" href={*href}>{ *name }</a>
                    }) }
                </div>

                <div class="nav-actions">
                    <PrimeButton class="nav-cta" onclick={open_whatsapp()}>
                        {"Agendar Consultoria"}
                    </PrimeButton>
                    <button class="burger-menu" onclick={toggle_menu}>
                        {
                            if *menu_open {
                                icons::close()
                            } else {
                                icons::menu()
                            }
                        }
                    </button>
                </div>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { for LINKS.iter().map(|(name, href)| html! {
                    <a class="mobile-link" href={*href} onclick={close_menu.clone()}>{ *name }</a>
                }) }
                <PrimeButton onclick={open_whatsapp()}>{"Agendar Consultoria"}</PrimeButton>
            </div>
        </nav>
    }
}

struct Metric {
    label: &'static str,
    value: u32,
    color: &'static str,
}

#[function_component(Hero)]
fn hero() -> Html {
    let metrics = [
        Metric { label: "Eficiência Tributária", value: 92, color: config::SKY },
        Metric { label: "Liquidez Sucessória", value: 98, color: config::BLUE },
        Metric { label: "Proteção de Ativos", value: 100, color: config::GOLD },
    ];

    let on_compare = Callback::from(|_: MouseEvent| {
        if let Some(element) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("comparativo"))
        {
            element.scroll_into_view();
        }
    });

    html! {
        <section class="hero">
            <div class="hero-backdrop">
                <div class="hero-glow glow-blue"></div>
                <div class="hero-glow glow-gold"></div>
            </div>

            <div class="hero-content">
                <div>
                    <TextReveal
                        text="Seu legado protegido com inteligência financeira."
                        keyword="protegido"
                        class="hero-title"
                    />
                    <p class="hero-sub">
                        {"Blindagem de ativos, liquidez tributária e "}
                        <span class="hero-pill">{"Consórcios High-End"}</span>
                        {" para quem não aceita menos que a excelência."}
                    </p>

                    <div class="hero-ctas">
                        <PrimeButton onclick={open_whatsapp()}>{"Agendar Consultoria"}</PrimeButton>
                        <PrimeButton variant={ButtonVariant::Dark} onclick={on_compare}>
                            {"Ver Comparativo"}
                        </PrimeButton>
                    </div>

                    <div class="hero-social">
                        <div class="avatar-row">
                            { for (1..=4).map(|i| html! {
                                <div class="avatar">
                                    <img
                                        src={format!("https://i.pravatar.cc/100?img={}", i + 10)}
                                        alt="Cliente"
                                        loading="lazy"
                                    />
                                </div>
                            }) }
                        </div>
                        <div>
                            <div class="stars">{ for (0..5).map(|_| icons::star_filled()) }</div>
                            <p class="hero-social-note">
                                {"Mais de "}<span>{"4.000"}</span>{" clientes protegidos"}
                            </p>
                        </div>
                    </div>
                </div>

                <div class="hero-card-wrap">
                    <div class="hero-card-glow"></div>
                    <div class="hero-card">
                        <div class="hero-card-head">
                            <div>
                                <h3>{"Performance Patrimonial"}</h3>
                                <p>{"Resumo Anual"}</p>
                            </div>
                            <div class="hero-card-badge">{ icons::trending_up() }</div>
                        </div>

                        <div class="metrics">
                            { for metrics.iter().enumerate().map(|(i, metric)| html! {
                                <div class="metric">
                                    <div class="metric-labels">
                                        <span>{ metric.label }</span>
                                        <span>{ format!("{}%", metric.value) }</span>
                                    </div>
                                    <div class="metric-track">
                                        <div
                                            class="metric-fill"
                                            style={format!(
                                                "width: {}%; background-color: {}; box-shadow: 0 0 10px {}60; animation-delay: {}s;",
                                                metric.value,
                                                metric.color,
                                                metric.color,
                                                0.5 + i as f64 * 0.2,
                                            )}
                                        ></div>
                                    </div>
                                </div>
                            }) }
                        </div>

                        <div class="floating-badge">
                            <div class="floating-badge-icon">{ icons::shield_check() }</div>
                            <div>
                                <p class="floating-badge-label">{"Status da Apólice"}</p>
                                <p class="floating-badge-value">{"100% VIGENTE"}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

struct Stat {
    label: &'static str,
    value: f64,
    suffix: &'static str,
    icon: fn() -> Html,
    color: &'static str,
}

#[function_component(SocialProof)]
fn social_proof() -> Html {
    let stats = [
        Stat {
            label: "Vidas Impactadas",
            value: 2000.0,
            suffix: "+",
            icon: icons::users,
            color: config::BLUE,
        },
        Stat {
            label: "Anos de Mercado",
            value: 15.0,
            suffix: "+",
            icon: icons::award,
            color: config::GOLD,
        },
        Stat {
            label: "Negócios Gerados",
            value: 4000.0,
            suffix: "+",
            icon: icons::briefcase_business,
            color: config::SKY,
        },
    ];

    html! {
        <section id="provas-sociais" class="social-proof">
            <div class="section-inner">
                <div class="stat-grid">
                    { for stats.iter().map(|stat| html! {
                        <div class="stat-tile">
                            <div
                                class="stat-icon"
                                style={format!(
                                    "color: {}; border-color: {}20; filter: drop-shadow(0 0 5px {}60);",
                                    stat.color, stat.color, stat.color,
                                )}
                            >
                                { (stat.icon)() }
                            </div>
                            <div class="stat-value">
                                <Counter value={stat.value} suffix={stat.suffix.to_string()} />
                            </div>
                            <p class="stat-label">{ stat.label }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

struct Feature {
    icon: fn() -> Html,
    title: &'static str,
    desc: &'static str,
    color: &'static str,
}

const PARTNERS: [&str; 8] = [
    "Prudential",
    "Allianz",
    "Mapfre",
    "Porto",
    "MetLife",
    "SulAmérica",
    "Tokio",
    "Liberty",
];

#[function_component(LifeInsurance)]
fn life_insurance() -> Html {
    let features = [
        Feature {
            icon: icons::coins,
            title: "Isenção Fiscal",
            desc: "Capital segurado 100% isento de IR e ITCMD para beneficiários.",
            color: config::SKY,
        },
        Feature {
            icon: icons::zap,
            title: "Liquidez Flash",
            desc: "Recursos liberados em dias, sem travas de inventário ou custos judiciais.",
            color: config::GOLD,
        },
        Feature {
            icon: icons::scale,
            title: "Sucessão Jurídica",
            desc: "Estrutura blindada para compra de quotas e continuidade empresarial.",
            color: config::SKY,
        },
        Feature {
            icon: icons::shield_alert,
            title: "Proteção em Vida",
            desc: "Receba o capital em vida para diagnósticos de doenças graves.",
            color: config::LAVENDER,
        },
    ];

    html! {
        <section id="seguro-vida" class="life">
            <div class="life-glow life-glow-blue"></div>
            <div class="life-glow life-glow-gold"></div>

            <div class="section-inner">
                <div class="life-grid">
                    <div class="life-copy">
                        <h2 class="life-title">
                            {"O Seguro de Vida"}<br />
                            <span class="gradient-text">{"Estratégico."}</span>
                        </h2>
                        <p class="life-sub">
                            {"Esqueça o seguro \"padrão\". Nossa consultoria desenha apólices de "}
                            <strong>{"Alta Performance"}</strong>
                            {" que funcionam como uma ferramenta de engenharia financeira para \
                              garantir que seu legado atravesse gerações intacto."}
                        </p>

                        <div class="callout">
                            <div class="callout-icon">{ icons::gem() }</div>
                            <div>
                                <h4>{"Diferencial Master Prime"}</h4>
                                <p>
                                    {"Acesso exclusivo às apólices \"Black\" das maiores seguradoras \
                                      globais, com coberturas não listadas no varejo."}
                                </p>
                            </div>
                        </div>

                        <PrimeButton onclick={open_whatsapp()}>{"Agendar Consultoria"}</PrimeButton>
                    </div>

                    <div class="feature-grid">
                        { for features.iter().map(|feature| html! {
                            <div class="feature-card" style={format!("border-color: {}40;", feature.color)}>
                                <div class="feature-accent" style={format!("background-color: {};", feature.color)}></div>
                                <div class="feature-icon" style={format!("color: {};", feature.color)}>
                                    { (feature.icon)() }
                                </div>
                                <h4>{ feature.title }</h4>
                                <p>{ feature.desc }</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="partners">
                    <p class="partners-label">{"Seguradoras Parceiras Global"}</p>
                    <Marquee speed={60.0} class="partners-marquee">
                        { for PARTNERS.iter().map(|partner| html! {
                            <span class="partner-name">{ *partner }</span>
                        }) }
                    </Marquee>
                </div>
            </div>
        </section>
    }
}

struct CompareRow {
    feature: &'static str,
    master: &'static str,
    bank: &'static str,
}

#[function_component(Comparison)]
fn comparison() -> Html {
    let rows = [
        CompareRow {
            feature: "Juros",
            master: "0% (Apenas Taxa Adm)",
            bank: "8% a 14% a.a.",
        },
        CompareRow {
            feature: "Custo Total",
            master: "Baixo Custo Efetivo",
            bank: "Até 3x o valor do bem",
        },
        CompareRow {
            feature: "Entrada",
            master: "Zero Obrigatória",
            bank: "Mínimo 20% a 30%",
        },
        CompareRow {
            feature: "Poder de Compra",
            master: "À Vista (Descontos)",
            bank: "Condicionado",
        },
    ];

    html! {
        <section id="comparativo" class="comparison">
            <div class="comparison-inner">
                <div class="section-head">
                    <span class="eyebrow gold">{"A Matemática não mente"}</span>
                    <h2>{"Consórcio vs. Financiamento"}</h2>
                </div>

                <div class="compare-table">
                    <div class="compare-head">
                        <div class="compare-criteria">{"Critério"}</div>
                        <div class="compare-master">{"Master Prime"}</div>
                        <div class="compare-bank">{"Banco Comum"}</div>
                    </div>

                    { for rows.iter().map(|row| html! {
                        <div class="compare-row">
                            <div class="compare-feature">{ row.feature }</div>
                            <div class="compare-master-cell">
                                { icons::check_circle() }
                                { row.master }
                            </div>
                            <div class="compare-bank-cell">{ row.bank }</div>
                        </div>
                    }) }

                    <div class="compare-foot">
                        <div class="compare-foot-copy">
                            <div class="compare-foot-icon">{ icons::trending_up() }</div>
                            <div>
                                <p class="compare-foot-title">{"Economia Inteligente"}</p>
                                <p class="compare-foot-sub">
                                    {"Em média 45% mais barato que financiamento."}
                                </p>
                            </div>
                        </div>
                        <PrimeButton variant={ButtonVariant::Primary} onclick={open_whatsapp()}>
                            {"Agendar Consultoria"}
                        </PrimeButton>
                    </div>
                </div>
            </div>
        </section>
    }
}

struct Solution {
    icon: fn() -> Html,
    title: &'static str,
    desc: &'static str,
    color: &'static str,
}

#[function_component(Solutions)]
fn solutions() -> Html {
    let cards = [
        Solution {
            icon: icons::building,
            title: "Consórcio Imobiliário",
            desc: "Alavancagem patrimonial sem juros. Compre imóveis ou terrenos de forma \
                   estratégica.",
            color: config::BLUE,
        },
        Solution {
            icon: icons::car,
            title: "Auto Premium",
            desc: "Acelere seu sonho. Cartas de crédito para veículos de luxo com taxas \
                   administrativas mínimas.",
            color: config::GOLD,
        },
        Solution {
            icon: icons::globe,
            title: "Saúde Internacional",
            desc: "Acesso aos melhores hospitais do mundo. Seguro saúde com cobertura global e \
                   concierge.",
            color: config::SKY,
        },
        Solution {
            icon: icons::briefcase,
            title: "Empresarial",
            desc: "Proteção de sócios (Key Man), responsabilidade civil e riscos operacionais.",
            color: config::LAVENDER,
        },
    ];

    html! {
        <section id="solucoes" class="solutions">
            <div class="section-inner">
                <div class="solutions-head">
                    <h2>{"Soluções 360º"}</h2>
                    <p>
                        {"Um ecossistema completo para quem busca proteção e multiplicação de \
                          patrimônio em um só lugar."}
                    </p>
                </div>

                <div class="solutions-grid">
                    { for cards.iter().map(|card| html! {
                        <SpotlightCard
                            class="solution-card"
                            border_color={format!("{}40", card.color)}
                            glow_color={format!("{}30", card.color)}
                        >
                            <div class="solution-body">
                                <div
                                    class="solution-icon"
                                    style={format!("color: {}; border-color: {}30;", card.color, card.color)}
                                >
                                    { (card.icon)() }
                                </div>
                                <h3>{ card.title }</h3>
                                <p>{ card.desc }</p>
                                <a
                                    class="solution-link"
                                    href={config::whatsapp_link()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    style={format!("color: {};", card.color)}
                                >
                                    {"Saiba Mais "}{ icons::arrow_up_right() }
                                </a>
                            </div>
                        </SpotlightCard>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(CtaBanner)]
fn cta_banner() -> Html {
    html! {
        <div class="cta-banner-wrap">
            <div class="cta-banner">
                <h2>{"Pronto para elevar o nível?"}</h2>
                <p>
                    {"Agende uma consultoria gratuita de 15 minutos e descubra como proteger seu \
                      patrimônio hoje."}
                </p>
                <button class="cta-white" onclick={open_whatsapp()}>
                    {"Agendar Consultoria"}
                </button>
            </div>
        </div>
    }
}

struct Review {
    name: &'static str,
    role: &'static str,
    text: &'static str,
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let reviews = [
        Review {
            name: "Arnaldo Costa",
            role: "Contemplação Consórcio",
            text: "Fiz um consórcio de carro, ofertei o lance e fui contemplado no primeiro mês. \
                   Profissionais competentes, trabalho 100% consultivo.",
        },
        Review {
            name: "Danilo Gobbo",
            role: "Planeamento Automóvel",
            text: "Recomendo. Fui contemplado e a Master apresentou as melhores propostas, \
                   respeitou meu tempo. Muito satisfeito com o profissionalismo.",
        },
        Review {
            name: "Túlio Zozolotto",
            role: "Seguro Ágil",
            text: "O atendimento foi excelente. Tinha urgência e a equipe resolveu tudo em menos \
                   de 24h. Já estava com o novo seguro contratado. Demais!",
        },
        Review {
            name: "Paulo González",
            role: "Planeamento Patrimonial",
            text: "Não foi sorte e sim planeamento a minha contemplação! Satisfeito com a rapidez \
                   e confiabilidade em apresentar seus produtos. Obrigado!",
        },
        Review {
            name: "Gabriel Cestari",
            role: "Gestão Familiar",
            text: "Sempre fui muito bem atendido. Já tenho o seguro de 4 carros com a corretora. \
                   Recomendo pelo ótimo atendimento!",
        },
    ];

    let accents = [config::GOLD, config::BLUE, config::SKY];

    html! {
        <section id="depoimentos" class="testimonials">
            <div class="section-inner">
                <div class="section-head">
                    <span class="eyebrow">{"Feedback de Clientes"}</span>
                    <h2>{"Confiança Consolidada"}</h2>
                </div>

                <Marquee speed={80.0} class="reviews-marquee">
                    { for reviews.iter().enumerate().map(|(i, review)| {
                        let accent = accents[i % accents.len()];
                        let initial = review.name.chars().next().unwrap_or('M');
                        html! {
                            <div class="review-card" style={format!("border-color: {}30;", accent)}>
                                <div>
                                    <div class="review-stars" style={format!("color: {};", accent)}>
                                        { for (0..5).map(|_| icons::star_filled()) }
                                    </div>
                                    <p class="review-text">{ format!("\"{}\"", review.text) }</p>
                                </div>
                                <div class="review-author">
                                    <div class="review-avatar">{ initial }</div>
                                    <div>
                                        <h5>{ review.name }</h5>
                                        <span>{ review.role }</span>
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </Marquee>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="footer">
            <div class="section-inner footer-grid">
                <div class="footer-brand">
                    <BrandLogo />
                    <p>
                        {"Especialistas em proteção patrimonial e alavancagem financeira. Nosso \
                          compromisso é com a segurança do seu legado e a prosperidade do seu \
                          futuro."}
                    </p>
                    <div class="footer-social">
                        <a href={config::whatsapp_link()} target="_blank" rel="noopener noreferrer">
                            { icons::message_circle() }
                        </a>
                        <a href="#">{ icons::mail() }</a>
                        <a href="#">{ icons::map_pin() }</a>
                    </div>
                </div>

                <div>
                    <h4 class="footer-title">{"Contato"}</h4>
                    <ul class="footer-list">
                        <li>
                            { icons::phone() }
                            <span>{ config::CONTACT_PHONE }</span>
                        </li>
                        <li>
                            { icons::map_pin() }
                            <span>
                                { config::CONTACT_ADDRESS_1 }
                                <span class="footer-address-alt">{ config::CONTACT_ADDRESS_2 }</span>
                            </span>
                        </li>
                        <li>
                            { icons::clock() }
                            <span>{ config::CONTACT_HOURS }</span>
                        </li>
                    </ul>
                </div>

                <div>
                    <h4 class="footer-title">{"Links"}</h4>
                    <ul class="footer-list footer-links">
                        <li><a href="#seguro-vida">{"Seguro de Vida"}</a></li>
                        <li><a href="#comparativo">{"Consórcio vs Financiamento"}</a></li>
                        <li><a href="#solucoes">{"Soluções Corporativas"}</a></li>
                        <li><a href="#depoimentos">{"Depoimentos"}</a></li>
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{ format!("© {} Master Prime. Todos os direitos reservados.", year) }</p>
                <div class="footer-legal">
                    <Link<Route> to={Route::Privacy}>{"Política de Privacidade"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Termos de Uso"}</Link<Route>>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // start at the top on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Navbar />
            <main>
                <Hero />
                <SocialProof />
                <LifeInsurance />
                <Comparison />
                <Solutions />
                <CtaBanner />
                <Testimonials />
            </main>
            <Footer />
            { page_style() }
        </div>
    }
}

fn page_style() -> Html {
    let palette = format!(
        ":root {{ --mp-sky: {sky}; --mp-lavender: {lavender}; --mp-blue: {blue}; \
         --mp-gold: {gold}; --mp-bg: {bg}; --mp-dark: {dark}; --mp-card: {card}; \
         --mp-text: {text}; --mp-section: {section}; }}",
        sky = config::SKY,
        lavender = config::LAVENDER,
        blue = config::BLUE,
        gold = config::GOLD,
        bg = config::BG,
        dark = config::DARK_BG,
        card = config::CARD,
        text = config::TEXT,
        section = config::SECTION_BG,
    );

    html! {
        <style>
            { palette }
            { PAGE_STYLE }
        </style>
    }
}

const PAGE_STYLE: &str = r#"
    body, html {
        margin: 0;
        font-family: "Montserrat", sans-serif;
        background-color: var(--mp-bg);
        color: var(--mp-text);
        -webkit-font-smoothing: antialiased;
    }

    ::selection {
        background-color: var(--mp-sky);
        color: white;
    }

    * {
        box-sizing: border-box;
    }

    .icon {
        width: 1.25em;
        height: 1.25em;
        vertical-align: middle;
    }

    .section-inner {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 3rem;
    }

    .section-head {
        text-align: center;
        margin-bottom: 4rem;
    }

    .section-head h2 {
        font-size: 2.25rem;
        font-weight: 900;
        color: white;
        margin: 1rem 0 0;
    }

    .eyebrow {
        font-size: 10px;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 3px;
        color: #64748b;
    }

    .eyebrow.gold {
        color: var(--mp-gold);
    }

    .gradient-text {
        background: linear-gradient(to right, var(--mp-sky), var(--mp-lavender));
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }

    /* ---------- navbar ---------- */

    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 100;
        padding: 1.5rem 0;
        background: transparent;
        transition: all 0.5s ease;
    }

    .top-nav.scrolled {
        background: rgba(2, 6, 23, 0.9);
        backdrop-filter: blur(16px);
        border-bottom: 1px solid rgba(30, 58, 138, 0.3);
        padding: 0.75rem 0;
        box-shadow: 0 10px 15px -3px rgba(30, 58, 138, 0.05);
    }

    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 3rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }

    .nav-brand {
        text-decoration: none;
    }

    .nav-links {
        display: flex;
        align-items: center;
        gap: 2rem;
    }

    .nav-link {
        font-size: 10px;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 2px;
        color: #94a3b8;
        text-decoration: none;
        position: relative;
        transition: color 0.3s ease;
    }

    .nav-link:hover {
        color: white;
    }

    .nav-link::after {
        content: "";
        position: absolute;
        left: 0;
        bottom: -4px;
        width: 0;
        height: 2px;
        background-color: var(--mp-gold);
        transition: width 0.3s ease;
    }

    .nav-link:hover::after {
        width: 100%;
    }

    .nav-actions {
        display: flex;
        align-items: center;
        gap: 1rem;
    }

    .nav-cta {
        padding: 0.65rem 1.5rem !important;
    }

    .burger-menu {
        display: none;
        background: none;
        border: none;
        color: white;
        font-size: 1.5rem;
        cursor: pointer;
        z-index: 120;
    }

    .mobile-menu {
        position: fixed;
        inset: 0;
        background-color: var(--mp-bg);
        z-index: 110;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 2rem;
        opacity: 0;
        visibility: hidden;
        transition: opacity 0.5s ease, visibility 0.5s ease;
    }

    .mobile-menu.open {
        opacity: 1;
        visibility: visible;
    }

    .mobile-link {
        font-size: 1.5rem;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: -0.5px;
        color: white;
        text-decoration: none;
    }

    /* ---------- brand logo ---------- */

    .brand-logo {
        height: 2.75rem;
        width: 12rem;
        display: flex;
        align-items: center;
    }

    .brand-logo img {
        height: 100%;
        width: auto;
        object-fit: contain;
    }

    .brand-logo-placeholder {
        width: 100%;
        height: 100%;
        border: 1px dashed rgba(255, 255, 255, 0.2);
        border-radius: 8px;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(255, 255, 255, 0.05);
        font-size: 10px;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 2px;
        color: #94a3b8;
        text-align: center;
        padding: 0 0.5rem;
    }

    /* ---------- buttons ---------- */

    .btn-shine {
        position: absolute;
        inset: 0;
        background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.4), transparent);
        transform: translateX(-100%);
    }

    button:hover > .btn-shine {
        animation: shine 2s infinite;
    }

    .btn-label {
        position: relative;
        z-index: 1;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
    }

    @keyframes shine {
        100% { transform: translateX(100%); }
    }

    /* ---------- hero ---------- */

    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        padding-top: 6rem;
        overflow: hidden;
        background-color: var(--mp-bg);
    }

    .hero-backdrop {
        position: absolute;
        inset: 0;
        overflow: hidden;
        pointer-events: none;
    }

    .hero-glow {
        position: absolute;
        border-radius: 50%;
        filter: blur(120px);
    }

    .glow-blue {
        top: -10%;
        right: -10%;
        width: 700px;
        height: 700px;
        background-color: rgba(112, 147, 204, 0.08);
        animation: drift 20s linear infinite;
    }

    .glow-gold {
        top: 40%;
        left: -10%;
        width: 600px;
        height: 600px;
        background-color: rgba(222, 205, 63, 0.03);
        animation: sway 15s ease-in-out infinite;
    }

    @keyframes drift {
        0% { transform: scale(1) rotate(0deg); opacity: 0.3; }
        50% { transform: scale(1.2) rotate(180deg); opacity: 0.5; }
        100% { transform: scale(1) rotate(360deg); opacity: 0.3; }
    }

    @keyframes sway {
        0%, 100% { transform: scale(1.2) translateX(0); opacity: 0.2; }
        50% { transform: scale(1) translateX(-50px); opacity: 0.4; }
    }

    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 3rem;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }

    .hero-title {
        font-size: 4rem;
        font-weight: 900;
        line-height: 1.05;
        letter-spacing: -2px;
        color: white;
        margin: 0 0 1.5rem;
    }

    .hero-sub {
        color: #94a3b8;
        font-size: 1.25rem;
        font-weight: 500;
        line-height: 1.6;
        max-width: 32rem;
        margin: 0 0 2.5rem;
    }

    .hero-pill {
        font-weight: 700;
        padding: 0 0.25rem;
        border-radius: 4px;
        color: white;
        background-color: rgba(112, 147, 204, 0.12);
        border: 1px solid rgba(59, 130, 246, 0.3);
    }

    .hero-ctas {
        display: flex;
        gap: 1rem;
        flex-wrap: wrap;
    }

    .hero-social {
        margin-top: 3rem;
        display: flex;
        align-items: center;
        gap: 1.5rem;
    }

    .avatar-row {
        display: flex;
    }

    .avatar {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        border: 2px solid var(--mp-bg);
        background-color: #1e293b;
        overflow: hidden;
        margin-left: -0.75rem;
        box-shadow: 0 0 0 2px rgba(255, 255, 255, 0.05);
    }

    .avatar:first-child {
        margin-left: 0;
    }

    .avatar img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        filter: grayscale(1);
        opacity: 0.7;
        transition: opacity 0.3s ease;
    }

    .avatar img:hover {
        opacity: 1;
    }

    .stars {
        display: flex;
        gap: 2px;
        color: var(--mp-gold);
        font-size: 12px;
    }

    .hero-social-note {
        font-size: 0.75rem;
        font-weight: 700;
        color: #64748b;
        margin: 0.25rem 0 0;
    }

    .hero-social-note span {
        color: #e2e8f0;
    }

    .hero-card-wrap {
        position: relative;
    }

    .hero-card-glow {
        position: absolute;
        inset: 0;
        background: rgba(59, 130, 246, 0.2);
        filter: blur(60px);
        border-radius: 50%;
        transform: translateY(2.5rem);
    }

    .hero-card {
        position: relative;
        z-index: 10;
        background: rgba(15, 23, 42, 0.6);
        backdrop-filter: blur(24px);
        border-radius: 40px;
        padding: 2rem;
        border: 1px solid rgba(59, 130, 246, 0.2);
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
        transition: border-color 0.5s ease;
    }

    .hero-card:hover {
        border-color: rgba(59, 130, 246, 0.4);
    }

    .hero-card-head {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 2rem;
    }

    .hero-card-head h3 {
        font-size: 1.125rem;
        font-weight: 700;
        color: white;
        margin: 0;
    }

    .hero-card-head p {
        font-size: 0.75rem;
        color: #64748b;
        text-transform: uppercase;
        letter-spacing: 3px;
        margin: 0.25rem 0 0;
    }

    .hero-card-badge {
        padding: 0.75rem;
        border-radius: 12px;
        color: var(--mp-bg);
        background-color: var(--mp-gold);
        box-shadow: 0 0 15px rgba(222, 205, 62, 0.4);
        font-size: 1.25rem;
        display: flex;
    }

    .metrics {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }

    .metric-labels {
        display: flex;
        justify-content: space-between;
        font-size: 0.75rem;
        font-weight: 700;
        color: #94a3b8;
        text-transform: uppercase;
        letter-spacing: 1px;
        margin-bottom: 0.5rem;
    }

    .metric-track {
        height: 0.5rem;
        width: 100%;
        background-color: var(--mp-bg);
        border-radius: 9999px;
        overflow: hidden;
        border: 1px solid rgba(255, 255, 255, 0.05);
    }

    .metric-fill {
        height: 100%;
        border-radius: 9999px;
        animation: grow 1.5s ease both;
    }

    @keyframes grow {
        from { width: 0; }
    }

    .floating-badge {
        position: absolute;
        bottom: -2.5rem;
        left: -2.5rem;
        background-color: var(--mp-card);
        padding: 1.25rem;
        border-radius: 16px;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.4);
        border: 1px solid rgba(120, 188, 207, 0.2);
        display: flex;
        align-items: center;
        gap: 1rem;
        animation: bob 4s ease-in-out infinite;
    }

    @keyframes bob {
        0%, 100% { transform: translateY(-10px); }
        50% { transform: translateY(10px); }
    }

    .floating-badge-icon {
        padding: 0.75rem;
        border-radius: 50%;
        background-color: rgba(120, 188, 207, 0.12);
        color: var(--mp-sky);
        box-shadow: 0 0 10px rgba(120, 188, 207, 0.3);
        font-size: 1.25rem;
        display: flex;
    }

    .floating-badge-label {
        font-size: 0.75rem;
        color: #64748b;
        font-weight: 700;
        text-transform: uppercase;
        margin: 0;
    }

    .floating-badge-value {
        font-size: 0.875rem;
        font-weight: 900;
        color: white;
        margin: 0.125rem 0 0;
    }

    /* ---------- text reveal ---------- */

    .reveal-token {
        display: inline-block;
        margin-right: 0.6rem;
        opacity: 0;
        transform: translateY(20px);
        filter: blur(10px);
        transition-property: opacity, transform, filter;
        transition-timing-function: ease-out;
    }

    .text-reveal.revealed .reveal-token {
        opacity: 1;
        transform: translateY(0);
        filter: blur(0);
    }

    .reveal-token.highlight {
        background: linear-gradient(to right, var(--mp-sky), var(--mp-lavender));
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }

    /* ---------- social proof ---------- */

    .social-proof {
        padding: 5rem 0;
        position: relative;
        z-index: 20;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
        background-color: var(--mp-bg);
    }

    .stat-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }

    .stat-tile {
        display: flex;
        flex-direction: column;
        align-items: center;
        text-align: center;
        padding: 1.5rem;
        border-left: 1px solid rgba(255, 255, 255, 0.1);
    }

    .stat-tile:first-child {
        border-left: none;
    }

    .stat-icon {
        margin-bottom: 1rem;
        padding: 1rem;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid transparent;
        font-size: 2rem;
        display: flex;
        transition: background 0.5s ease;
    }

    .stat-tile:hover .stat-icon {
        background: rgba(255, 255, 255, 0.1);
    }

    .stat-value {
        font-size: 3rem;
        font-weight: 900;
        color: white;
        letter-spacing: -2px;
        margin-bottom: 0.5rem;
    }

    .stat-label {
        font-size: 10px;
        text-transform: uppercase;
        font-weight: 700;
        letter-spacing: 3px;
        color: #64748b;
        margin: 0;
    }

    /* ---------- life insurance ---------- */

    .life {
        padding: 6rem 0;
        position: relative;
        overflow: hidden;
        color: white;
        background-color: var(--mp-section);
    }

    .life-glow {
        position: absolute;
        border-radius: 50%;
        filter: blur(120px);
        pointer-events: none;
    }

    .life-glow-blue {
        top: 0;
        right: 0;
        width: 500px;
        height: 500px;
        background-color: var(--mp-blue);
        opacity: 0.2;
    }

    .life-glow-gold {
        bottom: 0;
        left: 0;
        width: 400px;
        height: 400px;
        background-color: var(--mp-gold);
        opacity: 0.1;
    }

    .life-grid {
        position: relative;
        z-index: 10;
        display: grid;
        grid-template-columns: 2fr 3fr;
        gap: 4rem;
        align-items: center;
    }

    .life-title {
        font-size: 3rem;
        font-weight: 900;
        line-height: 1.2;
        margin: 0 0 1.5rem;
    }

    .life-sub {
        color: #94a3b8;
        font-size: 1.125rem;
        font-weight: 300;
        line-height: 1.6;
        margin: 0 0 2rem;
    }

    .callout {
        padding: 1.5rem;
        border-radius: 16px;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(250, 204, 21, 0.2);
        backdrop-filter: blur(12px);
        margin-bottom: 2rem;
        display: flex;
        align-items: flex-start;
        gap: 1rem;
    }

    .callout-icon {
        color: var(--mp-gold);
        filter: drop-shadow(0 0 8px rgba(222, 205, 62, 0.5));
        font-size: 1.5rem;
        flex-shrink: 0;
        margin-top: 0.25rem;
    }

    .callout h4 {
        font-weight: 700;
        color: white;
        margin: 0 0 0.25rem;
    }

    .callout p {
        font-size: 0.875rem;
        color: #94a3b8;
        margin: 0;
    }

    .feature-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1.25rem;
    }

    .feature-card {
        position: relative;
        overflow: hidden;
        padding: 2rem;
        border-radius: 24px;
        background: rgba(30, 41, 59, 0.4);
        border: 1px solid;
        transition: background 0.3s ease, transform 0.3s ease;
    }

    .feature-card:hover {
        background: rgba(30, 41, 59, 0.6);
        transform: translateY(-4px);
    }

    .feature-accent {
        position: absolute;
        top: 0;
        left: 0;
        width: 4px;
        height: 100%;
    }

    .feature-icon {
        width: 3rem;
        height: 3rem;
        border-radius: 12px;
        background: rgba(255, 255, 255, 0.05);
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1.5rem;
        font-size: 1.5rem;
        transition: transform 0.3s ease;
    }

    .feature-card:hover .feature-icon {
        transform: scale(1.1);
    }

    .feature-card h4 {
        font-size: 1.125rem;
        font-weight: 700;
        color: #f1f5f9;
        margin: 0 0 0.75rem;
    }

    .feature-card p {
        font-size: 0.875rem;
        color: #94a3b8;
        font-weight: 300;
        line-height: 1.6;
        margin: 0;
    }

    /* ---------- marquee ---------- */

    .marquee {
        position: relative;
        overflow: hidden;
        width: 100%;
        mask-image: linear-gradient(to right, transparent, black 10%, black 90%, transparent);
        -webkit-mask-image: linear-gradient(to right, transparent, black 10%, black 90%, transparent);
    }

    .marquee-strip {
        display: flex;
        width: max-content;
        will-change: transform;
    }

    .marquee-copy {
        display: flex;
        align-items: stretch;
        gap: 3rem;
        padding-right: 3rem;
        flex-shrink: 0;
    }

    .partners {
        position: relative;
        z-index: 10;
        margin-top: 6rem;
        padding-top: 3rem;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
    }

    .partners-label {
        text-align: center;
        font-size: 10px;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 4px;
        color: #475569;
        margin: 0 0 2rem;
    }

    .partner-name {
        font-size: 1.5rem;
        font-weight: 900;
        text-transform: uppercase;
        color: #475569;
        white-space: nowrap;
        cursor: default;
        user-select: none;
        transition: color 0.3s ease;
    }

    .partner-name:hover {
        color: white;
        text-shadow: 0 0 5px rgba(255, 255, 255, 0.5);
    }

    /* ---------- comparison ---------- */

    .comparison {
        padding: 8rem 0;
        position: relative;
        overflow: hidden;
        background-color: var(--mp-bg);
    }

    .comparison-inner {
        max-width: 64rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        position: relative;
        z-index: 10;
    }

    .compare-table {
        background-color: var(--mp-dark);
        border-radius: 30px;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
        border: 1px solid rgba(255, 255, 255, 0.05);
        border-top: 2px solid var(--mp-blue);
        overflow: hidden;
    }

    .compare-head {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        padding: 1.5rem;
        font-size: 10px;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 2px;
        text-align: center;
        color: white;
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
        background: linear-gradient(to right, var(--mp-section), rgba(112, 147, 204, 0.06), var(--mp-section));
    }

    .compare-criteria {
        text-align: left;
    }

    .compare-master {
        color: var(--mp-sky);
    }

    .compare-bank {
        color: #64748b;
    }

    .compare-row {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        padding: 1.5rem;
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
        align-items: center;
        font-size: 0.875rem;
        transition: background 0.3s ease;
    }

    .compare-row:hover {
        background: rgba(255, 255, 255, 0.05);
    }

    .compare-feature {
        font-weight: 700;
        color: #cbd5e1;
    }

    .compare-master-cell {
        text-align: center;
        font-weight: 900;
        color: var(--mp-sky);
        display: flex;
        justify-content: center;
        align-items: center;
        gap: 0.5rem;
    }

    .compare-bank-cell {
        text-align: center;
        color: #475569;
        font-weight: 500;
    }

    .compare-foot {
        padding: 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 1.5rem;
        flex-wrap: wrap;
        background-color: rgba(112, 147, 204, 0.06);
        border-top: 1px solid rgba(112, 147, 204, 0.2);
    }

    .compare-foot-copy {
        display: flex;
        align-items: center;
        gap: 1rem;
    }

    .compare-foot-icon {
        padding: 0.75rem;
        background: rgba(255, 255, 255, 0.1);
        border-radius: 50%;
        color: #4ade80;
        font-size: 1.25rem;
        display: flex;
    }

    .compare-foot-title {
        font-weight: 700;
        color: white;
        margin: 0;
    }

    .compare-foot-sub {
        font-size: 0.75rem;
        color: #94a3b8;
        margin: 0.125rem 0 0;
    }

    /* ---------- solutions ---------- */

    .solutions {
        padding: 6rem 0;
        background-color: var(--mp-bg);
    }

    .solutions-head {
        margin-bottom: 4rem;
    }

    .solutions-head h2 {
        font-size: 2.25rem;
        font-weight: 900;
        color: white;
        margin: 0 0 1rem;
    }

    .solutions-head p {
        color: #94a3b8;
        max-width: 42rem;
        margin: 0;
    }

    .solutions-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1.5rem;
    }

    .spotlight-card {
        position: relative;
        border: 1px solid;
        border-radius: 30px;
        background: rgba(15, 23, 42, 0.4);
        backdrop-filter: blur(4px);
        transition: border-color 0.5s ease;
    }

    .spotlight-glow {
        position: absolute;
        inset: -1px;
        border-radius: 30px;
        transition: opacity 0.3s ease;
        pointer-events: none;
    }

    .spotlight-content {
        position: relative;
        height: 100%;
    }

    .solution-body {
        padding: 2rem;
        height: 100%;
        display: flex;
        flex-direction: column;
    }

    .solution-icon {
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 16px;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid;
        display: flex;
        align-items: center;
        justify-content: center;
        margin-bottom: 1.5rem;
        font-size: 1.75rem;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
    }

    .solution-body h3 {
        font-size: 1.125rem;
        font-weight: 700;
        color: white;
        margin: 0 0 0.75rem;
    }

    .solution-body p {
        font-size: 0.875rem;
        color: #94a3b8;
        line-height: 1.6;
        margin: 0 0 1.5rem;
        flex-grow: 1;
    }

    .solution-link {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 10px;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 2px;
        text-decoration: none;
        transition: color 0.3s ease;
    }

    .solution-link:hover {
        color: white !important;
    }

    /* ---------- cta banner ---------- */

    .cta-banner-wrap {
        padding: 5rem 1.5rem;
        background-color: var(--mp-bg);
    }

    .cta-banner {
        max-width: 72rem;
        margin: 0 auto;
        border-radius: 40px;
        padding: 5rem 3rem;
        text-align: center;
        position: relative;
        overflow: hidden;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
        border: 1px solid rgba(255, 255, 255, 0.1);
        background: linear-gradient(to right, #1e3a8a, var(--mp-blue));
    }

    .cta-banner h2 {
        font-size: 2.5rem;
        font-weight: 900;
        color: white;
        letter-spacing: -1px;
        margin: 0 0 1.5rem;
    }

    .cta-banner p {
        color: #eff6ff;
        font-size: 1.125rem;
        max-width: 42rem;
        margin: 0 auto 2.5rem;
    }

    .cta-white {
        background: white;
        color: var(--mp-bg);
        padding: 1.25rem 2.5rem;
        border: none;
        border-radius: 12px;
        font-family: inherit;
        font-weight: 900;
        text-transform: uppercase;
        letter-spacing: 2px;
        cursor: pointer;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }

    .cta-white:hover {
        transform: scale(1.05);
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
    }

    /* ---------- testimonials ---------- */

    .testimonials {
        padding: 6rem 0;
        position: relative;
        overflow: hidden;
        background-color: var(--mp-section);
    }

    .review-card {
        min-width: 400px;
        max-width: 400px;
        background-color: var(--mp-dark);
        border: 1px solid;
        padding: 2rem;
        border-radius: 30px;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.4);
        transition: background 0.3s ease;
    }

    .review-card:hover {
        background-color: #15203b;
    }

    .review-stars {
        display: flex;
        gap: 0.25rem;
        margin-bottom: 1.5rem;
        font-size: 0.875rem;
    }

    .review-text {
        color: #cbd5e1;
        font-style: italic;
        line-height: 1.6;
        margin: 0 0 2rem;
        white-space: normal;
    }

    .review-author {
        display: flex;
        align-items: center;
        gap: 1rem;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        padding-top: 1.5rem;
    }

    .review-avatar {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        color: white;
        font-weight: 700;
        font-size: 0.75rem;
        background: linear-gradient(135deg, var(--mp-blue), var(--mp-sky));
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
        flex-shrink: 0;
    }

    .review-author h5 {
        color: white;
        font-weight: 700;
        font-size: 0.875rem;
        margin: 0;
    }

    .review-author span {
        font-size: 10px;
        color: #64748b;
        text-transform: uppercase;
        letter-spacing: 1px;
        font-weight: 700;
    }

    /* ---------- footer ---------- */

    .footer {
        padding: 5rem 0 2.5rem;
        border-top: 1px solid rgba(30, 58, 138, 0.3);
        background-color: var(--mp-bg);
    }

    .footer-grid {
        display: grid;
        grid-template-columns: 2fr 1fr 1fr;
        gap: 3rem;
        margin-bottom: 4rem;
    }

    .footer-brand p {
        margin: 1.5rem 0 0;
        color: #94a3b8;
        font-size: 0.875rem;
        line-height: 1.6;
        max-width: 24rem;
    }

    .footer-social {
        margin-top: 2rem;
        display: flex;
        gap: 1rem;
    }

    .footer-social a {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.05);
        display: flex;
        align-items: center;
        justify-content: center;
        color: #94a3b8;
        transition: all 0.3s ease;
    }

    .footer-social a:hover {
        color: white;
        background: #2563eb;
        box-shadow: 0 0 10px #2563eb;
    }

    .footer-title {
        font-weight: 700;
        color: white;
        margin: 0 0 1.5rem;
        text-transform: uppercase;
        font-size: 0.75rem;
        letter-spacing: 2px;
    }

    .footer-list {
        list-style: none;
        padding: 0;
        margin: 0;
        display: flex;
        flex-direction: column;
        gap: 1rem;
        font-size: 0.875rem;
        color: #94a3b8;
    }

    .footer-list li {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
    }

    .footer-list .icon {
        flex-shrink: 0;
        margin-top: 0.125rem;
        color: var(--mp-blue);
    }

    .footer-address-alt {
        display: block;
        margin-top: 0.5rem;
        font-size: 0.75rem;
        opacity: 0.7;
    }

    .footer-links a {
        color: #94a3b8;
        text-decoration: none;
        font-weight: 500;
        transition: color 0.3s ease;
    }

    .footer-links a:hover {
        color: var(--mp-sky);
    }

    .footer-bottom {
        max-width: 80rem;
        margin: 0 auto;
        padding: 2rem 3rem 0;
        border-top: 1px solid rgba(255, 255, 255, 0.05);
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
        flex-wrap: wrap;
        font-size: 0.75rem;
        color: #64748b;
        font-weight: 500;
    }

    .footer-legal {
        display: flex;
        gap: 1.5rem;
    }

    .footer-legal a {
        color: #64748b;
        text-decoration: none;
    }

    .footer-legal a:hover {
        color: #cbd5e1;
    }

    /* ---------- responsive ---------- */

    @media (max-width: 1024px) {
        .nav-links {
            display: none;
        }

        .burger-menu {
            display: block;
        }

        .hero-content {
            grid-template-columns: 1fr;
        }

        .hero-card-wrap {
            display: none;
        }

        .life-grid {
            grid-template-columns: 1fr;
        }

        .solutions-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }

    @media (max-width: 640px) {
        .section-inner,
        .nav-content {
            padding: 0 1.5rem;
        }

        .nav-cta {
            display: none;
        }

        .hero-title {
            font-size: 2.75rem;
        }

        .stat-grid {
            grid-template-columns: 1fr;
        }

        .stat-tile {
            border-left: none;
            border-top: 1px solid rgba(255, 255, 255, 0.1);
        }

        .stat-tile:first-child {
            border-top: none;
        }

        .feature-grid,
        .solutions-grid {
            grid-template-columns: 1fr;
        }

        .review-card {
            min-width: 85vw;
        }
    }
"#;
