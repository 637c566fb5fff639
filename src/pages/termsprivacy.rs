use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-page">
            <div class="legal-content">
                <h1>{"Termos de Uso"}</h1>
                <p class="legal-updated">{"Última atualização: janeiro de 2025"}</p>

                <h2>{"1. Sobre este site"}</h2>
                <p>
                    {"Este site tem caráter exclusivamente informativo sobre os serviços de \
                      consultoria em proteção patrimonial, seguros e consórcios da Master Prime. \
                      Nenhum conteúdo aqui constitui oferta vinculante, recomendação de \
                      investimento ou proposta de contrato."}
                </p>

                <h2>{"2. Contratação"}</h2>
                <p>
                    {"Toda contratação é realizada diretamente com nossos consultores, pelos \
                      canais de atendimento indicados no site. Condições, coberturas e taxas são \
                      definidas em proposta formal das seguradoras e administradoras parceiras."}
                </p>

                <h2>{"3. Propriedade intelectual"}</h2>
                <p>
                    {"Marcas, textos e elementos visuais deste site pertencem à Master Prime ou \
                      a seus licenciantes e não podem ser reproduzidos sem autorização."}
                </p>

                <h2>{"4. Responsabilidade"}</h2>
                <p>
                    {"As informações são mantidas atualizadas com o melhor esforço, mas podem \
                      sofrer alterações sem aviso. Em caso de divergência, prevalecem os \
                      documentos contratuais assinados."}
                </p>

                <Link<Route> to={Route::Home} classes="legal-back">{"← Voltar"}</Link<Route>>
            </div>
            { legal_style() }
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <div class="legal-content">
                <h1>{"Política de Privacidade"}</h1>
                <p class="legal-updated">{"Última atualização: janeiro de 2025"}</p>

                <h2>{"1. Dados coletados"}</h2>
                <p>
                    {"Este site não possui formulários, cadastro ou área logada e não armazena \
                      dados pessoais. O contato é iniciado por você, via WhatsApp, no seu \
                      aplicativo."}
                </p>

                <h2>{"2. Cookies"}</h2>
                <p>
                    {"Não utilizamos cookies de rastreamento nem ferramentas de analytics. \
                      Recursos de terceiros (como imagens ilustrativas) podem registrar acessos \
                      conforme as políticas dos respectivos provedores."}
                </p>

                <h2>{"3. Atendimento"}</h2>
                <p>
                    {"As conversas mantidas pelos nossos canais de atendimento são tratadas com \
                      confidencialidade e usadas somente para elaborar sua proposta, conforme a \
                      LGPD (Lei nº 13.709/2018)."}
                </p>

                <h2>{"4. Contato"}</h2>
                <p>
                    {"Dúvidas sobre esta política podem ser encaminhadas aos canais informados \
                      no rodapé do site."}
                </p>

                <Link<Route> to={Route::Home} classes="legal-back">{"← Voltar"}</Link<Route>>
            </div>
            { legal_style() }
        </div>
    }
}

fn legal_style() -> Html {
    html! {
        <style>
            {r#"
                .legal-page {
                    min-height: 100vh;
                    background-color: #020617;
                    color: #f1f5f9;
                    font-family: "Montserrat", sans-serif;
                    padding: 6rem 1.5rem;
                }

                .legal-content {
                    max-width: 44rem;
                    margin: 0 auto;
                }

                .legal-content h1 {
                    font-size: 2.25rem;
                    font-weight: 900;
                    letter-spacing: -1px;
                    margin: 0 0 0.5rem;
                }

                .legal-updated {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 2px;
                    color: #64748b;
                    margin: 0 0 3rem;
                }

                .legal-content h2 {
                    font-size: 1.125rem;
                    font-weight: 700;
                    margin: 2rem 0 0.75rem;
                }

                .legal-content p {
                    color: #94a3b8;
                    line-height: 1.7;
                    margin: 0;
                }

                .legal-back {
                    display: inline-block;
                    margin-top: 3rem;
                    color: #78bccf;
                    text-decoration: none;
                    font-weight: 700;
                    font-size: 0.875rem;
                }

                .legal-back:hover {
                    color: white;
                }
            "#}
        </style>
    }
}
